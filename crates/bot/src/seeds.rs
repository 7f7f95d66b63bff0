#![forbid(unsafe_code)]

/// Seed phrases for the daily status post; one is drawn at random.
pub const DAILY_SEEDS: [&str; 10] = [
    "much ado about",
    "i say unto thee",
    "marry good people",
    "what ho my friends",
    "by my troth i",
    "verily i tell you",
    "forsooth the world is",
    "mark my words for",
    "thou shouldst know that",
    "wisdom tells us that",
];

const QUESTION_WORDS: [&str; 6] = ["what", "who", "why", "how", "when", "where"];
const GREETING_WORDS: [&str; 4] = ["hello", "hi ", "hey", "greetings"];
const INSULT_WORDS: [&str; 4] = ["fool", "stupid", "idiot", "villain"];

/// Pick the seed phrase for replying to a mention, routed on shallow
/// patterns in the mention text: questions, greetings, calls for help,
/// insults, then a general fallback.
pub fn seed_for_mention(text: &str) -> &'static str {
    let t = text.to_lowercase();
    if t.contains('?') || QUESTION_WORDS.iter().any(|q| t.starts_with(q)) {
        "i think that"
    } else if GREETING_WORDS.iter().any(|g| t.contains(g)) {
        "good morrow to thee"
    } else if t.contains("help") {
        "i shall assist thee"
    } else if INSULT_WORDS.iter().any(|w| t.contains(w)) {
        "thou art a"
    } else {
        "marry i say"
    }
}

/// Drop `@handle` words from a mention so only the message itself seeds
/// the generator.
pub fn strip_handles(text: &str) -> String {
    text.split_whitespace()
        .filter(|w| !w.starts_with('@'))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_route_to_thinking_seed() {
        assert_eq!(seed_for_mention("what say you"), "i think that");
        assert_eq!(seed_for_mention("any news today?"), "i think that");
        assert_eq!(seed_for_mention("HOW goes it"), "i think that");
    }

    #[test]
    fn greetings_route_to_morrow_seed() {
        assert_eq!(seed_for_mention("hello good constable"), "good morrow to thee");
        assert_eq!(seed_for_mention("hey there"), "good morrow to thee");
    }

    #[test]
    fn help_and_insults_have_their_own_seeds() {
        assert_eq!(seed_for_mention("i need help with this"), "i shall assist thee");
        assert_eq!(seed_for_mention("thou art a fool"), "thou art a");
    }

    #[test]
    fn everything_else_falls_through() {
        assert_eq!(seed_for_mention("a fine day on the watch"), "marry i say");
    }

    #[test]
    fn handles_are_stripped() {
        assert_eq!(strip_handles("@dogberry how goes the watch"), "how goes the watch");
        assert_eq!(strip_handles("@a @b hi"), "hi");
        assert_eq!(strip_handles("no handles here"), "no handles here");
    }
}
