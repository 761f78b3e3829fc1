use std::fmt;

/// Balances and transfer amounts are whole units held as signed 64-bit integers.
/// The sign is there so a corrupt or hand-written record still decodes; the
/// ledger itself never commits a negative balance.
pub type Balance = i64;

/// Parse a transfer amount from its decimal string form.
/// Example: "300" -> 300, "+5" -> 5, "-5" -> error, "12.5" -> error
pub fn parse_amount(input: &str) -> Result<Balance, ParseAmountError> {
    let amount: Balance = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat(input.to_string()))?;

    if amount < 0 {
        return Err(ParseAmountError::Negative(amount));
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat(String),
    Negative(Balance),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat(input) => {
                write!(f, "amount '{}' is not an integer", input)
            }
            ParseAmountError::Negative(amount) => {
                write!(f, "amount {} must not be negative", amount)
            }
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("300"), Ok(300));
        assert_eq!(parse_amount("0"), Ok(0));
        assert_eq!(parse_amount("+5"), Ok(5));
        assert_eq!(parse_amount("007"), Ok(7));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(
            parse_amount("abc"),
            Err(ParseAmountError::InvalidFormat("abc".to_string()))
        );
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12.5").is_err());
        assert!(parse_amount(" 10").is_err());
        assert!(parse_amount("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert_eq!(parse_amount("-5"), Err(ParseAmountError::Negative(-5)));
    }
}
