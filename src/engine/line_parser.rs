use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::bill::{BillLine, ParseWarning, ParsedBill};

/// Lazy `.*?` keeps the numeric group anchored to the end of the line,
/// so item names may contain embedded digits ("2 Burgers 9.99") as long
/// as the terminal token is numeric.
static PRICE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.*?)(\d+(\.\d{2})?)$").unwrap());

/// Turn the extraction model's plain-text output into bill lines, one
/// candidate item+price per physical line, price as the trailing token.
/// Lines that fail the rule become warnings, never errors, and surviving
/// lines keep their input order.
pub fn parse_bill_text(text: &str) -> ParsedBill {
    let mut lines = Vec::new();
    let mut warnings = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = PRICE_LINE.captures(line) else {
            warnings.push(ParseWarning::NoTrailingPrice {
                line: line.to_string(),
            });
            continue;
        };

        let item_name = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
        let price_text = caps.get(2).map_or("", |m| m.as_str());

        // The pattern should guarantee a convertible token, but a failed
        // conversion is still data, not a panic.
        match price_text.parse::<f64>() {
            Ok(price) => lines.push(BillLine { item_name, price }),
            Err(_) => warnings.push(ParseWarning::BadPrice {
                line: line.to_string(),
            }),
        }
    }

    ParsedBill { lines, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: f64) -> BillLine {
        BillLine {
            item_name: name.to_string(),
            price,
        }
    }

    #[test]
    fn recovers_name_and_price_from_valid_lines() {
        let parsed = parse_bill_text("Coffee  3.50");
        assert_eq!(parsed.lines, vec![line("Coffee", 3.50)]);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn accepts_integer_prices() {
        let parsed = parse_bill_text("Bread 8");
        assert_eq!(parsed.lines, vec![line("Bread", 8.0)]);
    }

    #[test]
    fn line_without_trailing_price_becomes_a_warning() {
        let parsed = parse_bill_text("Thank you for visiting");
        assert!(parsed.lines.is_empty());
        assert_eq!(
            parsed.warnings,
            vec![ParseWarning::NoTrailingPrice {
                line: "Thank you for visiting".to_string()
            }]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert_eq!(parse_bill_text(""), ParsedBill::default());
        assert_eq!(parse_bill_text("\n   \n\t\n"), ParsedBill::default());
    }

    #[test]
    fn embedded_digits_stay_in_the_item_name() {
        let parsed = parse_bill_text("2 Burgers 9.99");
        assert_eq!(parsed.lines, vec![line("2 Burgers", 9.99)]);
    }

    #[test]
    fn currency_symbol_is_kept_in_the_name() {
        // No symbol stripping: the `$` sits outside the numeric token.
        let parsed = parse_bill_text("Steak $12.50");
        assert_eq!(parsed.lines, vec![line("Steak $", 12.50)]);
    }

    #[test]
    fn three_fraction_digits_split_at_the_last_valid_token() {
        // `12.345` is not a valid price token; the match falls back to
        // the trailing `345`. Literal behavior, kept on purpose.
        let parsed = parse_bill_text("Combo 12.345");
        assert_eq!(parsed.lines, vec![line("Combo 12.", 345.0)]);
    }

    #[test]
    fn bare_price_keeps_an_empty_item_name() {
        // Open question resolved as pass-through: an empty name is
        // recorded, not dropped.
        let parsed = parse_bill_text("12.50");
        assert_eq!(parsed.lines, vec![line("", 12.50)]);
    }

    #[test]
    fn output_preserves_input_order() {
        let parsed = parse_bill_text("Burger 9.99\nFries 3.25\nThank you");
        assert_eq!(
            parsed.lines,
            vec![line("Burger", 9.99), line("Fries", 3.25)]
        );
        assert_eq!(parsed.warnings.len(), 1);
    }
}
