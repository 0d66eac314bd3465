//! `el-subsumers` — the thin CLI front-end of §6.3: load an ontology
//! source, query the named subsumers of one class, print one per line.

use clap::Parser;
use el_reasoner::concept::Concept;
use el_reasoner::loader;
use el_reasoner::ontology::OntologyIndex;
use el_reasoner::reasoner::subsumers;
use el_reasoner::symbol::Interner;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "el-subsumers", about = "Print the named subsumers of a class in an EL ontology")]
struct Args {
    /// Path to a §6.1a-syntax ontology source file
    ontology: PathBuf,

    /// The class whose subsumers to print
    class: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let loaded = loader::load_file(&args.ontology).map_err(|e| e.to_string())?;

    let mut symbols = Interner::new();
    let class = symbols.intern(strip_quotes(&args.class));

    let index = OntologyIndex::build(loaded.axioms, loaded.concepts, loaded.names);

    let results = subsumers(&index, class).map_err(|e| e.to_string())?;
    for term in &results {
        println!("{}", format_concept(term));
    }

    Ok(())
}

fn format_concept(term: &Concept) -> String {
    match term {
        Concept::Top => "⊤".to_string(),
        Concept::Name(s) => s.as_str().to_string(),
        // Never reached: `subsumers` only ever emits Name and Top terms.
        other => format!("{other:?}"),
    }
}

fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '\'')
}
