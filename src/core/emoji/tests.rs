//! Classifier tests against the embedded table.

use super::{CodepointEntry, EmbeddedLoader, EmojiTable, ExclusionSet, TableLoader};

fn table() -> EmojiTable {
    EmbeddedLoader.load().expect("embedded table").table
}

#[test]
fn removes_basic_emoji_faces() {
    assert_eq!(table().remove_emoji("Hello 😀 World 😊!"), "Hello  World !");
}

#[test]
fn removes_various_emoji_categories() {
    assert_eq!(
        table().remove_emoji("⌚ Watch ⌨ Keyboard 🎅 Santa 🏂 Snowboard"),
        " Watch  Keyboard  Santa  Snowboard"
    );
}

#[test]
fn preserves_markdown_ascii() {
    let input = "# Heading * List item ** Bold **";
    assert_eq!(table().remove_emoji(input), input);
}

#[test]
fn preserves_digits() {
    assert_eq!(table().remove_emoji("0123456789"), "0123456789");
}

#[test]
fn keeps_punctuation_around_removed_emoji() {
    assert_eq!(
        table().remove_emoji("Hello! 👋 How are you? 🤔 I am fine. 😊"),
        "Hello!  How are you?  I am fine. "
    );
}

#[test]
fn empty_and_plain_text_unchanged() {
    let t = table();
    assert_eq!(t.remove_emoji(""), "");
    let plain = "This is plain ASCII text with no emoji!";
    assert_eq!(t.remove_emoji(plain), plain);
    assert!(!t.contains_emoji(plain));
}

#[test]
fn removes_emoji_at_boundaries_and_in_runs() {
    let t = table();
    assert_eq!(t.remove_emoji("😀Start and End😀"), "Start and End");
    assert_eq!(t.remove_emoji("Multiple 😀😊😎 emoji"), "Multiple  emoji");
}

#[test]
fn removes_emoji_across_lines() {
    assert_eq!(
        table().remove_emoji("Line 1 😀\nLine 2 🎉\nLine 3 ✨"),
        "Line 1 \nLine 2 \nLine 3 "
    );
}

#[test]
fn removes_regional_indicator_flags() {
    assert_eq!(
        table().remove_emoji("USA 🇺🇸 France 🇫🇷 Japan 🇯🇵"),
        "USA  France  Japan "
    );
}

#[test]
fn keeps_html_entities() {
    let input = "&copy; 2024 &reg; &trade;";
    assert_eq!(table().remove_emoji(input), input);
}

#[test]
fn keeps_text_style_symbols() {
    let input = "© 2024 ® ™ ‼ → ← ↔ € ℹ";
    assert_eq!(table().remove_emoji(input), input);
}

#[test]
fn removes_heart_and_symbol_emoji() {
    assert_eq!(
        table().remove_emoji("I ❤ coding! ✅ Done ❌ Not done"),
        "I  coding!  Done  Not done"
    );
}

#[test]
fn removes_animals_and_food() {
    let t = table();
    assert_eq!(t.remove_emoji("🐶 Dog 🐱 Cat 🦁 Lion"), " Dog  Cat  Lion");
    assert_eq!(t.remove_emoji("🍕 Pizza 🍔 Burger 🍎 Apple"), " Pizza  Burger  Apple");
}

#[test]
fn removes_astral_codepoints_whole() {
    assert_eq!(
        table().remove_emoji("Complex emoji: 👨👩👧👦 family"),
        "Complex emoji:  family"
    );
}

#[test]
fn sequence_glue_outside_the_table_survives() {
    let t = table();
    // Zero width joiners between family members.
    assert_eq!(
        t.remove_emoji("a👨\u{200D}👩\u{200D}👧b"),
        "a\u{200D}\u{200D}b"
    );
    // Variation selector after a heart.
    assert_eq!(t.remove_emoji("I ❤\u{FE0F} it"), "I \u{FE0F} it");
    // Keycap sequence: the digit and the combining keycap are both text.
    assert_eq!(t.remove_emoji("1\u{FE0F}\u{20E3}"), "1\u{FE0F}\u{20E3}");
}

#[test]
fn keeps_markdown_formatting_and_urls() {
    let t = table();
    assert_eq!(
        t.remove_emoji("**Bold** 😊 *Italic* 🎉 `code`"),
        "**Bold**  *Italic*  `code`"
    );
    assert_eq!(
        t.remove_emoji("Visit https://example.com 😊 for more"),
        "Visit https://example.com  for more"
    );
    assert_eq!(
        t.remove_emoji("```\ncode here\n```\n😊 Text with emoji"),
        "```\ncode here\n```\n Text with emoji"
    );
}

#[test]
fn leaves_smart_punctuation_alone() {
    assert_eq!(
        table().remove_emoji("\u{201C}Hello\u{201D} \u{2014} she said 😊"),
        "\u{201C}Hello\u{201D} \u{2014} she said "
    );
}

#[test]
fn removal_is_idempotent() {
    let t = table();
    for input in [
        "",
        "Hello 😀 World 😊!",
        "a👨\u{200D}👩\u{200D}👧b",
        "🇺🇸🇫🇷",
        "# plain * text",
        "❤\u{FE0F}✨⌚",
    ] {
        let once = t.remove_emoji(input);
        assert_eq!(t.remove_emoji(&once), once, "input: {:?}", input);
    }
}

#[test]
fn printable_ascii_is_never_emoji() {
    let t = table();
    assert!((0x20..=0x7E).all(|c| !t.is_emoji(c)));
}

#[test]
fn excluded_codepoints_are_never_emoji() {
    let t = table();
    for entry in ExclusionSet::default().entries() {
        for code in entry.start()..=entry.end() {
            assert!(!t.is_emoji(code), "U+{:04X} is excluded", code);
        }
    }
}

#[test]
fn embedded_table_is_sorted_and_disjoint() {
    let t = table();
    assert!(t.is_well_formed());
    assert!(
        t.entries()
            .windows(2)
            .all(|w| w[0].start() <= w[0].end() && w[0].end() < w[1].start())
    );
}

#[test]
fn embedded_table_covers_expected_blocks() {
    let t = table();
    for code in [0x231A, 0x2328, 0x2764, 0x1F004, 0x1F1E6, 0x1F600, 0x1F64F, 0x1FAF8] {
        assert!(t.is_emoji(code), "U+{:04X} should be emoji", code);
    }
    for code in [0x2139, 0x2194, 0x200D, 0xFE0F, 0x20E3, 0x1F650, 0xE0020] {
        assert!(!t.is_emoji(code), "U+{:04X} should not be emoji", code);
    }
}

#[test]
fn overlapping_tables_fall_back_to_linear_scan() {
    let t = EmojiTable::new(vec![
        CodepointEntry::Range(0x100, 0x200),
        CodepointEntry::Range(0x150, 0x160),
        CodepointEntry::Single(0x300),
    ]);
    assert!(!t.is_well_formed());
    // 0x180 is covered by the first range only, past the start of the second.
    assert!(t.is_emoji(0x180));
    assert!(t.is_emoji(0x300));
    assert!(!t.is_emoji(0x250));
}

#[test]
fn disjoint_lookup_matches_linear_scan() {
    let entries = vec![
        CodepointEntry::Single(0x10),
        CodepointEntry::Range(0x20, 0x2F),
        CodepointEntry::Single(0x31),
        CodepointEntry::Range(0x40, 0x41),
    ];
    let t = EmojiTable::new(entries.clone());
    assert!(t.is_well_formed());
    for code in 0..0x50 {
        let linear = entries.iter().any(|e| e.contains(code));
        assert_eq!(t.is_emoji(code), linear, "code {:#x}", code);
    }
}

#[test]
fn empty_table_removes_nothing() {
    let t = EmojiTable::empty();
    assert!(t.is_well_formed());
    assert_eq!(t.remove_emoji("Hi 😀"), "Hi 😀");
    assert!(!t.contains_emoji("😀"));
}

#[test]
fn utf16_removal_handles_surrogate_pairs() {
    let t = table();
    let input: Vec<u16> = "Hi 😀 there ✨".encode_utf16().collect();
    let expected: Vec<u16> = "Hi  there ".encode_utf16().collect();
    assert_eq!(t.remove_emoji_utf16(&input), expected);
}

#[test]
fn utf16_removal_keeps_unpaired_surrogates() {
    let t = table();
    // Lone high surrogate, lone low surrogate, then a real pair for U+1F600.
    let input = [0x0041, 0xD83D, 0x0042, 0xDE00, 0xD83D, 0xDE00, 0x0043];
    assert_eq!(
        t.remove_emoji_utf16(&input),
        vec![0x0041, 0xD83D, 0x0042, 0xDE00, 0x0043]
    );
}

#[test]
fn span_collapses_single_codepoint_runs() {
    assert_eq!(CodepointEntry::span(5, 5), CodepointEntry::Single(5));
    assert_eq!(CodepointEntry::span(5, 6), CodepointEntry::Range(5, 6));
    assert_eq!(CodepointEntry::Range(5, 9).width(), 5);
}
