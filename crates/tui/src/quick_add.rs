use ledger::{Amount, categories};

/// Parsed form of the one-line entry: `AMOUNT [#category] [note…]`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAdd {
    pub amount: Amount,
    pub category: String,
    pub note: String,
}

pub fn parse(input: &str) -> Result<QuickAdd, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter an amount.".to_string());
    }

    let mut parts = trimmed.splitn(2, ' ');
    let amount_raw = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim();

    let amount: Amount = amount_raw
        .parse()
        .map_err(|_| "Amount must be numeric.".to_string())?;
    if amount.is_zero() {
        return Err("Amount must be non-zero.".to_string());
    }

    let (category, note) = parse_tag(rest)?;

    Ok(QuickAdd {
        amount,
        category: category.unwrap_or_else(|| categories::FALLBACK.to_string()),
        note: note.unwrap_or_default(),
    })
}

fn parse_tag(rest: &str) -> Result<(Option<String>, Option<String>), String> {
    if rest.is_empty() {
        return Ok((None, None));
    }

    let mut tag: Option<String> = None;
    let mut kept: Vec<&str> = Vec::new();

    for token in rest.split_whitespace() {
        if let Some(name) = token.strip_prefix('#') {
            if name.is_empty() {
                kept.push(token);
                continue;
            }
            if tag.is_some() {
                return Err("Too many tags: max 1.".to_string());
            }
            tag = Some(name.to_lowercase());
        } else {
            kept.push(token);
        }
    }

    let note = kept.join(" ");
    let note = if note.is_empty() { None } else { Some(note) };
    Ok((tag, note))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_amount_tag_and_note() {
        let parsed = parse("12,50 #food lunch at the bar").unwrap();
        assert_eq!(parsed.amount, Amount::new(1250));
        assert_eq!(parsed.category, "food");
        assert_eq!(parsed.note, "lunch at the bar");
    }

    #[test]
    fn missing_tag_falls_back_to_other() {
        let parsed = parse("3 espresso").unwrap();
        assert_eq!(parsed.amount, Amount::new(300));
        assert_eq!(parsed.category, categories::FALLBACK);
        assert_eq!(parsed.note, "espresso");
    }

    #[test]
    fn rejects_empty_zero_and_double_tags() {
        assert!(parse("").is_err());
        assert!(parse("0 #food").is_err());
        assert!(parse("lunch 12").is_err());
        assert!(parse("5 #food #travel split").is_err());
    }
}
