use serde::Serialize;

/// Smallest value with a classical representation.
pub const MIN_VALUE: u32 = 1;
/// Largest value with a classical representation (MMMCMXCIX).
pub const MAX_VALUE: u32 = 3999;

/// One addressable unit of the numeral system, e.g. `(900, "CM")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumeralSymbol {
    pub value: u32,
    pub symbol: &'static str,
}

const fn sym(value: u32, symbol: &'static str) -> NumeralSymbol {
    NumeralSymbol { value, symbol }
}

// Strictly descending by value. Each subtractive pair sits before the single
// letter it starts with, so a first-match scan finds the longest symbol.
static SYMBOL_TABLE: [NumeralSymbol; 13] = [
    sym(1000, "M"),
    sym(900, "CM"),
    sym(500, "D"),
    sym(400, "CD"),
    sym(100, "C"),
    sym(90, "XC"),
    sym(50, "L"),
    sym(40, "XL"),
    sym(10, "X"),
    sym(9, "IX"),
    sym(5, "V"),
    sym(4, "IV"),
    sym(1, "I"),
];

/// The process-wide symbol table, highest value first.
pub fn symbol_table() -> &'static [NumeralSymbol] {
    &SYMBOL_TABLE
}

/// Greedy decomposition of `value`: each table symbol used, with its repeat count.
pub(crate) fn greedy_parts(value: u32) -> impl Iterator<Item = (&'static NumeralSymbol, u32)> {
    let mut remaining = value;
    symbol_table().iter().filter_map(move |numeral| {
        let count = remaining / numeral.value;
        remaining %= numeral.value;
        (count > 0).then_some((numeral, count))
    })
}

/// Returns true for the seven letters that make up every numeral.
pub(crate) fn is_numeral_letter(c: char) -> bool {
    matches!(c, 'M' | 'D' | 'C' | 'L' | 'X' | 'V' | 'I')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_descending() {
        for pair in symbol_table().windows(2) {
            assert!(
                pair[0].value > pair[1].value,
                "{} must precede {}",
                pair[0].symbol,
                pair[1].symbol
            );
        }
    }

    #[test]
    fn table_covers_additive_and_subtractive_forms() {
        let symbols: Vec<&str> = symbol_table().iter().map(|s| s.symbol).collect();
        for form in ["M", "D", "C", "L", "X", "V", "I"] {
            assert!(symbols.contains(&form), "missing additive form {form}");
        }
        for form in ["CM", "CD", "XC", "XL", "IX", "IV"] {
            assert!(symbols.contains(&form), "missing subtractive form {form}");
        }
        assert_eq!(symbols.len(), 13);
    }

    #[test]
    fn subtractive_pair_precedes_its_leading_letter() {
        let table = symbol_table();
        let index_of = |s: &str| table.iter().position(|e| e.symbol == s).unwrap();
        assert!(index_of("CM") < index_of("C"));
        assert!(index_of("CD") < index_of("C"));
        assert!(index_of("XC") < index_of("X"));
        assert!(index_of("XL") < index_of("X"));
        assert!(index_of("IX") < index_of("I"));
        assert!(index_of("IV") < index_of("I"));
    }

    #[test]
    fn greedy_parts_of_1984() {
        let parts: Vec<(&str, u32)> = greedy_parts(1984).map(|(s, n)| (s.symbol, n)).collect();
        assert_eq!(parts, vec![("M", 1), ("CM", 1), ("L", 1), ("X", 3), ("IV", 1)]);
        assert_eq!(greedy_parts(0).count(), 0);
    }

    #[test]
    fn numeral_letters() {
        for c in "MDCLXVI".chars() {
            assert!(is_numeral_letter(c));
        }
        assert!(!is_numeral_letter('i'));
        assert!(!is_numeral_letter('A'));
        assert!(!is_numeral_letter('4'));
    }
}
