//! A minimal concrete ontology-source loader.
//!
//! Implements one instance of the external-loader contract of §6.1: a
//! line-oriented axiom syntax, one already-binary axiom per line, plus
//! Unicode/ASCII operator pairs so fixtures can be written without
//! Unicode input. Binarising n-ary conjunctions is the loader's job per
//! the purpose statement — this format simply never accepts anything
//! but binary conjunctions, so there is nothing left to binarise.
//!
//! Modeled on the teacher's `parser` module in spirit (dispatch by
//! recognised shape, `log::warn!` on a skippable defect, a hard error
//! only when the shape itself can't be recognised at all) without
//! importing any of its RDF/XML/Turtle/Manchester machinery.

use crate::concept::{and_, exists, name, top, Concept};
use crate::error::{ReasonerError, ReasonerResult};
use crate::ontology::Axiom;
use crate::symbol::{Interner, Symbol};
use hashbrown::HashSet;
use std::path::Path;
use std::rc::Rc;

/// Everything [`crate::ontology::OntologyIndex::build`] needs, read from
/// one ontology source.
pub struct LoadedOntology {
    pub axioms: Vec<Axiom>,
    pub concepts: Vec<Rc<Concept>>,
    pub names: Vec<Symbol>,
}

/// Read `path` and parse it as the §6.1a syntax.
pub fn load_file(path: &Path) -> ReasonerResult<LoadedOntology> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ReasonerError::Loader(format!("reading {}: {e}", path.display())))?;
    load(&text)
}

/// Parse `source` as the §6.1a syntax.
///
/// A line that names a recognisable axiom shape (a `⊑`/`<=` or
/// `≡`/`==` separator is present) but is malformed within that shape —
/// an unbalanced conjunction, an unrecognised token — is the *malformed
/// axiom* case of §7: skipped, logged, load continues. A line with
/// neither separator is not a recognisable axiom shape at all, which is
/// the *loader failure* case: the whole load aborts.
pub fn load(source: &str) -> ReasonerResult<LoadedOntology> {
    let mut symbols = Interner::new();
    let mut axioms = Vec::new();
    let mut concepts = Vec::new();
    let mut names = Vec::new();
    let mut seen_names = HashSet::new();

    for (lineno, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line, &mut symbols) {
            Ok(Some(axiom)) => {
                collect_names(&axiom_lhs(&axiom), &mut names, &mut seen_names);
                collect_names(&axiom_rhs(&axiom), &mut names, &mut seen_names);
                concepts.push(axiom_lhs(&axiom));
                concepts.push(axiom_rhs(&axiom));
                axioms.push(axiom);
            }
            Ok(None) => {
                log::warn!("line {}: malformed axiom, skipping: {line:?}", lineno + 1);
            }
            Err(()) => {
                return Err(ReasonerError::Loader(format!(
                    "line {}: not a recognised axiom shape: {line:?}",
                    lineno + 1
                )));
            }
        }
    }

    Ok(LoadedOntology {
        axioms,
        concepts,
        names,
    })
}

fn axiom_lhs(axiom: &Axiom) -> Rc<Concept> {
    match axiom {
        Axiom::Gci(l, _) | Axiom::Equivalence(l, _) => l.clone(),
    }
}

fn axiom_rhs(axiom: &Axiom) -> Rc<Concept> {
    match axiom {
        Axiom::Gci(_, r) | Axiom::Equivalence(_, r) => r.clone(),
    }
}

/// `Ok(Some(axiom))` on success, `Ok(None)` for a recognised-but-broken
/// shape, `Err(())` when no axiom separator occurs in the line at all.
fn parse_line(line: &str, symbols: &mut Interner) -> Result<Option<Axiom>, ()> {
    if let Some((l, r)) = split_once_any(line, &["≡", "=="]) {
        return Ok(match (parse_side(l, symbols), parse_side(r, symbols)) {
            (Some(l), Some(r)) => Some(Axiom::Equivalence(l, r)),
            _ => None,
        });
    }
    if let Some((l, r)) = split_once_any(line, &["⊑", "<="]) {
        return Ok(match (parse_side(l, symbols), parse_side(r, symbols)) {
            (Some(l), Some(r)) => Some(Axiom::Gci(l, r)),
            _ => None,
        });
    }
    Err(())
}

fn split_once_any<'a>(line: &'a str, seps: &[&str]) -> Option<(&'a str, &'a str)> {
    for sep in seps {
        if let Some(idx) = line.find(sep) {
            return Some((&line[..idx], &line[idx + sep.len()..]));
        }
    }
    None
}

/// Parse one side of an axiom: `top`, a bare name, a binary conjunction,
/// or an existential restriction. Returns `None` for anything else,
/// including an n-ary conjunction (a second operator occurrence) —
/// this syntax only ever produces already-binary terms.
fn parse_side(side: &str, symbols: &mut Interner) -> Option<Rc<Concept>> {
    let side = side.trim();
    if side.is_empty() {
        return None;
    }
    if side == "top" || side == "Top" || side == "⊤" {
        return Some(top());
    }
    if let Some(rest) = side.strip_prefix('∃') {
        let (role, filler) = rest.split_once('.')?;
        return Some(exists(
            symbols.intern(role.trim()),
            name(symbols.intern(filler.trim())),
        ));
    }
    if let Some(rest) = side.strip_prefix("some ") {
        let mut tokens = rest.split_whitespace();
        let role = tokens.next()?;
        let filler = tokens.next()?;
        if tokens.next().is_some() {
            return None;
        }
        return Some(exists(symbols.intern(role), name(symbols.intern(filler))));
    }
    if let Some((l, r)) = split_conjunction(side) {
        return Some(and_(
            name(symbols.intern(l.trim())),
            name(symbols.intern(r.trim())),
        ));
    }
    if !side.is_empty() && side.chars().all(is_name_char) {
        return Some(name(symbols.intern(side)));
    }
    None
}

fn split_conjunction(side: &str) -> Option<(&str, &str)> {
    for sep in ["⊓", "&"] {
        if let Some(idx) = side.find(sep) {
            let (l, r) = (&side[..idx], &side[idx + sep.len()..]);
            if r.contains(sep) {
                return None;
            }
            return Some((l, r));
        }
    }
    None
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn collect_names(concept: &Rc<Concept>, names: &mut Vec<Symbol>, seen: &mut HashSet<Symbol>) {
    match concept.as_ref() {
        Concept::Top => {}
        Concept::Name(s) => {
            if seen.insert(s.clone()) {
                names.push(s.clone());
            }
        }
        Concept::And(l, r) => {
            collect_names(l, names, seen);
            collect_names(r, names, seen);
        }
        Concept::Exists(_, filler) => collect_names(filler, names, seen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_strs(loaded: &LoadedOntology) -> Vec<String> {
        loaded.names.iter().map(|s| s.as_str().to_string()).collect()
    }

    #[test]
    fn plain_gci_chain() {
        let loaded = load("A ⊑ B\nB ⊑ C\n").unwrap();
        assert_eq!(loaded.axioms.len(), 2);
        assert_eq!(name_strs(&loaded), vec!["A", "B", "C"]);
    }

    #[test]
    fn ascii_fallback_for_gci() {
        let loaded = load("A <= B\n").unwrap();
        assert_eq!(loaded.axioms.len(), 1);
    }

    #[test]
    fn conjunction_on_rhs_and_lhs() {
        let loaded = load("A ⊑ B ⊓ C\nB ⊓ C ⊑ D\n").unwrap();
        assert_eq!(loaded.axioms.len(), 2);
        assert!(loaded.concepts.iter().any(|c| c.as_and().is_some()));
    }

    #[test]
    fn conjunction_ascii_fallback() {
        let loaded = load("A ⊑ B & C\n").unwrap();
        assert_eq!(loaded.axioms.len(), 1);
    }

    #[test]
    fn existential_on_rhs_and_lhs_unicode_and_ascii() {
        let loaded = load("A ⊑ ∃r.B\n∃r.B ⊑ C\nD ⊑ some r E\n").unwrap();
        assert_eq!(loaded.axioms.len(), 3);
        assert!(loaded.concepts.iter().any(|c| c.as_exists().is_some()));
    }

    #[test]
    fn equivalence_unicode_and_ascii() {
        let loaded = load("A ≡ B\nC == D\n").unwrap();
        assert_eq!(loaded.axioms.len(), 2);
        assert!(matches!(loaded.axioms[0], Axiom::Equivalence(..)));
    }

    #[test]
    fn top_declaration_both_spellings() {
        let loaded = load("top ⊑ A\nTop ⊑ B\n").unwrap();
        assert_eq!(loaded.axioms.len(), 2);
        assert!(loaded.concepts.iter().any(|c| c.is_top()));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let loaded = load("# a comment\n\nA ⊑ B\n   \n").unwrap();
        assert_eq!(loaded.axioms.len(), 1);
    }

    #[test]
    fn malformed_shape_is_skipped_not_fatal() {
        // Recognised gci separator, but the rhs is an n-ary conjunction.
        let loaded = load("A ⊑ B\nA ⊑ B ⊓ C ⊓ D\n").unwrap();
        assert_eq!(loaded.axioms.len(), 1);
    }

    #[test]
    fn unrecognisable_line_is_a_loader_failure() {
        let err = load("this line has no axiom separator at all").unwrap_err();
        assert!(matches!(err, ReasonerError::Loader(_)));
    }

    #[test]
    fn names_are_ordered_by_first_occurrence() {
        let loaded = load("C ⊑ B\nB ⊑ A\n").unwrap();
        assert_eq!(name_strs(&loaded), vec!["C", "B", "A"]);
    }
}
