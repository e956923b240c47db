// External Crate Imports
use nom::{
    IResult, Offset,
    combinator::{consumed, map, opt},
    multi::many0,
    sequence::pair,
};

// Local Crate Imports
use super::{
    errors::FormulaError,
    primitives::{count, element_symbol},
};
use crate::{Count, Element, ElementCounts};

// Public API ==========================================================================================================

/// Formula = { Token }- ;
///
/// Parses `formula` (which may be a sub-slice of a larger `input`, like the formula part of a modification) into an
/// element-count map. Error spans are reported relative to `input`.
pub fn chemical_formula(input: &str, formula: &str) -> Result<ElementCounts, FormulaError> {
    if formula.is_empty() {
        return Err(FormulaError::Empty);
    }

    // NOTE: `many0` only errors if `token` succeeds without consuming input, which it never does
    let (rest, tokens) = many0(token)(formula)
        .map_err(|_| FormulaError::malformed_token(input, formula, input.offset(formula)))?;
    if !rest.is_empty() {
        return Err(FormulaError::malformed_token(input, rest, input.offset(rest)));
    }

    let mut counts = ElementCounts::new();
    for Token { text, symbol, count } in tokens {
        let offset = input.offset(text);
        let element =
            Element::new(symbol).map_err(|_| FormulaError::unknown_element(input, text, offset))?;
        let count = match count {
            None => Count::default(),
            Some(n) => Count::new(n).ok_or_else(|| FormulaError::zero_count(input, text, offset))?,
        };
        // NOTE: Repeated elements aren't summed: the last occurrence of an element sets its count
        counts.insert(element, count);
    }

    Ok(counts)
}

// Private Sub-Parsers =================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Token<'s> {
    text: &'s str,
    symbol: &'s str,
    count: Option<u32>,
}

/// Token = Element Symbol , [ Count ] ;
fn token(i: &str) -> IResult<&str, Token<'_>> {
    map(consumed(pair(element_symbol, opt(count))), |(text, (symbol, count))| Token {
        text,
        symbol,
        count,
    })(i)
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn parse(formula: &str) -> Result<ElementCounts, FormulaError> {
        chemical_formula(formula, formula)
    }

    #[test]
    fn test_token() {
        let token = |text, symbol, count| Token {
            text,
            symbol,
            count,
        };
        assert_eq!(super::token("C6H12O6"), Ok(("H12O6", token("C6", "C", Some(6)))));
        assert_eq!(super::token("NaCl"), Ok(("Cl", token("Na", "Na", None))));
        assert_eq!(super::token("Xx2"), Ok(("", token("Xx2", "Xx", Some(2)))));
        assert_eq!(super::token("H02"), Ok(("", token("H02", "H", Some(2)))));
        assert!(super::token("2H").is_err());
        assert!(super::token("h2").is_err());
    }

    #[test]
    fn parse_valid_formulae() {
        let glucose = parse("C6H12O6").unwrap();
        let symbols_and_counts: Vec<_> = glucose
            .iter()
            .map(|(e, c)| (e.symbol(), c.get()))
            .collect();
        assert_eq!(symbols_and_counts, [("C", 6), ("H", 12), ("O", 6)]);
        // Counts default to one
        assert_eq!(parse("NaCl").unwrap().total_atoms(), 2);
        // Leading zeroes are just digits
        assert_eq!(parse("H02").unwrap(), parse("H2").unwrap());
        // Chemically implausible formulae are still formulae
        assert_eq!(parse("He12Ar3").unwrap().total_atoms(), 15);
    }

    #[test]
    fn repeated_elements_keep_the_last_count() {
        assert_eq!(parse("C2C3").unwrap(), parse("C3").unwrap());
        assert_eq!(parse("H2OH").unwrap(), parse("HO").unwrap());
        assert_eq!(parse("CH3CH2OH").unwrap(), parse("C1H1O").unwrap());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse(""), Err(FormulaError::Empty));
        assert_snapshot!(parse("Xx2").unwrap_err(),
            @r#"the element in "Xx2" could not be found in the element table (while parsing "Xx2")"#);
        assert_snapshot!(parse("H2Xx2O").unwrap_err(),
            @r#"the element in "Xx2" could not be found in the element table (while parsing "H2Xx2O")"#);
        assert_snapshot!(parse("CL").unwrap_err(),
            @r#"the element in "L" could not be found in the element table (while parsing "CL")"#);
        assert_snapshot!(parse("h2o").unwrap_err(),
            @r#"expected an element symbol, but found "h2o" (while parsing "h2o")"#);
        assert_snapshot!(parse("H2O+").unwrap_err(),
            @r#"expected an element symbol, but found "+" (while parsing "H2O+")"#);
        assert_snapshot!(parse("H2 O").unwrap_err(),
            @r#"expected an element symbol, but found " O" (while parsing "H2 O")"#);
        assert_snapshot!(parse("C0H4").unwrap_err(),
            @r#"the count in "C0" must be at least one (while parsing "C0H4")"#);
        // Counts that overflow are left unparsed
        assert_snapshot!(parse("C99999999999").unwrap_err(),
            @r#"expected an element symbol, but found "99999999999" (while parsing "C99999999999")"#);
    }

    #[test]
    fn error_spans() {
        let Err(FormulaError::UnknownElement { span, .. }) = parse("H2Xx2O") else {
            panic!("expected an unknown element");
        };
        assert_eq!((span.offset(), span.len()), (2, 3));
        let Err(FormulaError::MalformedToken { span, .. }) = parse("H2O+") else {
            panic!("expected a malformed token");
        };
        assert_eq!((span.offset(), span.len()), (3, 1));
        // Spans are relative to the whole input
        let input = "+H2Xx";
        let Err(FormulaError::UnknownElement { span, input: source, .. }) = chemical_formula(input, &input[1..])
        else {
            panic!("expected an unknown element");
        };
        assert_eq!(source, input);
        assert_eq!((span.offset(), span.len()), (3, 2));
    }
}
