#![forbid(unsafe_code)]

/// Words stripped from the front of a reply when the model echoes the
/// address back (the bot's own name and generic greetings).
const ADDRESS_WORDS: &[&str] = &["dogberry", "hey", "hello"];

fn is_address(word: &str) -> bool {
    ADDRESS_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w))
}

/// Post-process a raw generated reply: trim, drop a leading address word
/// when more text follows it, and capitalize the first letter.
pub fn clean(text: &str) -> String {
    let trimmed = text.trim();
    let rest = match trimmed.split_once(char::is_whitespace) {
        Some((first, tail)) if is_address(first) => tail.trim(),
        _ => trimmed,
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(rest.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_capitalizes() {
        assert_eq!(clean("  good morrow friends  "), "Good morrow friends");
    }

    #[test]
    fn strips_leading_address_word() {
        assert_eq!(clean("dogberry how are you"), "How are you");
        assert_eq!(clean("HELLO good people"), "Good people");
        assert_eq!(clean("hey   verily i say"), "Verily i say");
    }

    #[test]
    fn never_begins_with_the_address_word() {
        for raw in ["dogberry what news", "hello there friend", "hey thou art wise"] {
            let out = clean(raw);
            let first = out.split_whitespace().next().unwrap_or("");
            assert!(!is_address(first), "{out:?} still starts with an address word");
        }
    }

    #[test]
    fn lone_address_word_is_kept() {
        // nothing follows it, so there is no echo to strip
        assert_eq!(clean("dogberry"), "Dogberry");
    }

    #[test]
    fn idempotent_on_clean_input() {
        let once = clean("marry good people all");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
    }
}
