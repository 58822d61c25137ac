//! EITHER combinator - first passing alternative wins

use crate::foundation::limits::Walk;
use crate::foundation::validator::Kind;
use crate::foundation::{Outcome, Validator};
use crate::value::Value;

/// Accepts a value if any of `alternatives` does.
///
/// Alternatives run left to right; the first passing outcome is returned
/// verbatim. If none pass, the failure's expected type lists every
/// alternative's name, e.g. `either of types ["string","regexp"]`.
#[must_use]
pub fn either(alternatives: Vec<Validator>) -> Validator {
    let names: Vec<&str> = alternatives.iter().map(Validator::human).collect();
    let listed = serde_json::to_string(&names).unwrap_or_else(|_| names.join(","));
    Validator::new(
        format!("either of types {listed}"),
        Kind::Either(alternatives),
    )
}

pub(crate) fn check(
    alternatives: &[Validator],
    human: &str,
    value: &mut Value,
    walk: Walk<'_>,
) -> Outcome {
    for alternative in alternatives {
        let outcome = alternative.run(value, walk);
        if outcome.is_ok() {
            return outcome;
        }
    }
    Outcome::type_mismatch(human, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{array, bool, int, string};
    use crate::value::TypeTag;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn name_enumerates_alternatives() {
        let v = either(vec![string(), int()]);
        assert_eq!(v.human(), r#"either of types ["string","int"]"#);
    }

    #[test]
    fn first_success_is_returned_verbatim() {
        let warned = Validator::from_fn("warned", |_| Outcome::passed().with_warning("picked"));
        let v = either(vec![int(), warned, string()]);
        let outcome = v.validate(&mut Value::from("x"));
        assert!(outcome.is_ok());
        assert_eq!(outcome.warning(), Some("picked"));
    }

    #[test]
    fn collection_alternative_keeps_its_items() {
        let v = either(vec![bool(), array(int())]);
        let outcome = v.validate(&mut Value::from(json!([1, 2])));
        assert!(outcome.is_ok());
        assert_eq!(outcome.items().len(), 2);
    }

    #[test]
    fn failure_is_synthesized_from_input() {
        let v = either(vec![string(), int()]);
        let outcome = v.validate(&mut Value::from(true));
        let mismatch = outcome.mismatch().expect("simple failure");
        assert_eq!(mismatch.expected, r#"either of types ["string","int"]"#);
        assert_eq!(mismatch.actual, TypeTag::Boolean);
        assert_eq!(mismatch.value, Value::from(true));
    }

    #[test]
    fn empty_either_rejects_everything() {
        let v = either(Vec::new());
        assert_eq!(v.human(), "either of types []");
        assert!(!v.validate(&mut Value::Null).is_ok());
    }
}
