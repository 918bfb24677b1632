//! End-to-end rendering scenarios.

use console::{measure_text_width, strip_ansi_codes};
use gridline::{convert_ansi_to_html, BorderPreset, Table, TableError};

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .set_header([
            "\x1b[1m\x1b[34mHeader1\x1b[0m",
            "\x1b[1m\x1b[34mHeader2\x1b[0m",
            "\x1b[1m\x1b[34mHeader3\x1b[0m",
        ])
        .add_row([
            "\x1b[32mThis is a text\x1b[0m",
            "\x1b[33mThis is another text\x1b[0m",
            "\x1b[36mThis is the third text\x1b[0m",
        ])
        .add_row([
            "\x1b[35mThis is another text\x1b[0m",
            "\x1b[31mNow\x1b[0m\n\x1b[32madd some\x1b[0m\n\x1b[33mmulti line stuff\x1b[0m",
            "\x1b[1m\x1b[32mThis is awesome\x1b[0m",
        ]);
    table
}

fn max_visible_width(text: &str) -> usize {
    text.split('\n').map(measure_text_width).max().unwrap_or(0)
}

mod text_output {
    use super::*;

    #[test]
    fn styled_table_with_multi_line_cell() {
        let table = styled_table();
        let output = table.to_string();
        let plain = strip_ansi_codes(&output);

        for needle in [
            "Header1",
            "Header2",
            "Header3",
            "This is a text",
            "This is awesome",
            "multi line stuff",
        ] {
            assert!(plain.contains(needle), "missing {:?}", needle);
        }
        assert!(table.get_height() >= 5);
        assert_eq!(table.get_height(), output.split('\n').count());
    }

    #[test]
    fn all_lines_share_one_width() {
        let output = styled_table().to_string();
        let widths: Vec<usize> = output.split('\n').map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn missing_columns() {
        let mut table = Table::new();
        table
            .set_header(["Header1", "Header2", "Header3"])
            .add_row(["One One", "One Two", "One Three"])
            .add_row(["Two One", "Two Two"])
            .add_row(["Three One"]);

        let output = table.to_string();
        for needle in ["One One", "Two One", "Three One"] {
            assert!(output.contains(needle));
        }
        assert!(table.get_height() >= 5);
        assert_eq!(max_visible_width(&output), measure_text_width(output.lines().next().unwrap()));
    }

    #[test]
    fn single_column_and_headerless() {
        let mut table = Table::new();
        table
            .set_header(["Header1"])
            .add_rows([["One One"], ["Two One"], ["Three One"]]);
        assert!(table.to_string().contains("Three One"));
        assert!(table.get_height() >= 5);

        let mut table = Table::new();
        table
            .add_row(["Row 1 Col 1", "Row 1 Col 2"])
            .add_row(["Row 2 Col 1", "Row 2 Col 2"])
            .add_row(["Row 3 Col 1", "Row 3 Col 2"]);
        let output = table.to_string();
        assert!(output.contains("Row 1 Col 1") && output.contains("Row 3 Col 2"));
        assert!(!output.contains('╞'));
    }

    #[test]
    fn header_only() {
        let mut table = Table::new();
        table.set_header([
            "\x1b[1m\x1b[32mColumn A\x1b[0m",
            "\x1b[1m\x1b[33mColumn B\x1b[0m",
            "\x1b[1m\x1b[34mColumn C\x1b[0m",
        ]);
        let plain = strip_ansi_codes(&table.to_string()).to_string();
        assert!(plain.contains("Column A") && plain.contains("Column C"));
        assert_eq!(table.get_height(), 4);
    }

    #[test]
    fn ascii_preset_glyphs() {
        let mut table = Table::new();
        table
            .set_header(["\x1b[1m\x1b[32mHello\x1b[0m", "\x1b[1m\x1b[33mthere\x1b[0m"])
            .add_row(["\x1b[31ma\x1b[0m", "\x1b[32mb\x1b[0m"])
            .add_row(["c", "d"]);
        table.set_style("ascii").unwrap();

        let output = table.to_string();
        for glyph in ['+', '|', '-'] {
            assert!(output.contains(glyph));
        }
        let plain = strip_ansi_codes(&output);
        assert!(plain.contains("Hello") && plain.contains("there"));
        assert!(!output.contains('─'));
    }

    #[test]
    fn every_preset_renders() {
        let mut table = Table::new();
        table
            .set_header(["\x1b[1mHello\x1b[0m", "\x1b[4mthere\x1b[0m"])
            .add_row(["a", "b"])
            .add_row(["c", "d"]);

        for name in BorderPreset::NAMES {
            table.set_style(name).unwrap();
            let output = table.to_string();
            let plain = strip_ansi_codes(&output);
            assert!(plain.contains("Hello") && plain.contains("there"), "{}", name);
            assert_eq!(table.get_height(), output.split('\n').count(), "{}", name);
        }
    }

    #[test]
    fn unknown_style_rejected() {
        let mut table = Table::new();
        let err = table.set_style("double").unwrap_err();
        assert!(matches!(err, TableError::InvalidPreset(_)));
        assert_eq!(table.preset(), BorderPreset::Modern);
    }

    #[test]
    fn special_symbols() {
        let mut table = Table::new();
        table
            .set_header(["Type", "Characters"])
            .add_row(["Math", "∑∏∆√∞±≠≤≥"])
            .add_row(["Arrows", "←→↑↓↔↕⇄⇅"])
            .add_row(["Greek", "αβγδεζηθικλμ"]);
        let output = table.to_string();
        assert!(output.contains("∑∏∆") && output.contains("←→↑↓"));
        assert!(table.to_html().contains("αβγδεζηθικλμ"));
    }

    #[test]
    fn international_text() {
        let mut table = Table::new();
        table.set_header([
            "\x1b[1m\x1b[34mLanguage\x1b[0m",
            "\x1b[1m\x1b[35mText\x1b[0m",
            "\x1b[1m\x1b[36mEmoji\x1b[0m",
        ]);
        for (lang, text, emoji) in [
            ("English", "Hello World", "🇺🇸🌍"),
            ("Russian", "Привет мир", "🇷🇺❄️"),
            ("Chinese", "你好世界", "🇨🇳🐉"),
            ("Arabic", "مرحبا بالعالم", "🇸🇦🕌"),
            ("Japanese", "こんにちは世界", "🇯🇵🗾"),
            ("Hindi", "नमस्ते दुनिया", "🇮🇳🕉️"),
            ("Thai", "สวัสดีโลก", "🇹🇭🏛️"),
        ] {
            table.add_row([
                format!("\x1b[32m{}\x1b[0m", lang),
                format!("\x1b[33m{}\x1b[0m", text),
                format!("\x1b[31m{}\x1b[0m", emoji),
            ]);
        }

        let output = table.to_string();
        assert!(output.contains("你好世界") && output.contains("🇺🇸🌍"));
        assert!(output.contains("🇷🇺❄️") && output.contains("🇹🇭🏛️"));
        let widths: Vec<usize> = output.split('\n').map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
        assert_eq!(widths[0], table.layout().line_width());
        assert!(table.to_html().contains("🇮🇳🕉️"));
    }

    #[test]
    fn emoji_sequences_wrap_in_narrow_column() {
        let mut table = Table::new();
        table
            .add_row(["Russian", "\x1b[31m🇷🇺❄️🇷🇺❄️\x1b[0m"])
            .set_width(16);

        let output = table.to_string();
        assert_eq!(output.matches("🇷🇺❄️").count(), 2, "{}", output);
        let widths: Vec<usize> = output.split('\n').map(measure_text_width).collect();
        assert!(widths.iter().all(|&w| w == 16), "{:?}\n{}", widths, output);
    }
}

mod empty {
    use super::*;

    #[test]
    fn empty_table_renders_something() {
        let table = Table::new();
        assert!(!table.to_string().is_empty());
        assert!(!table.to_html().is_empty());
        assert_eq!(table.get_height(), table.to_string().split('\n').count());
    }

    #[test]
    fn empty_table_every_preset() {
        let mut table = Table::new();
        for preset in BorderPreset::ALL {
            table.set_preset(preset);
            let output = table.to_string();
            assert!(!output.is_empty(), "{}", preset);
            assert_eq!(table.get_height(), output.split('\n').count(), "{}", preset);
        }
    }
}

mod width_limits {
    use super::*;

    #[test]
    fn extreme_width_constraint() {
        let mut table = Table::new();
        table
            .set_header(["A", "B"])
            .add_row([
                "\x1b[31mVery long content that should definitely wrap\x1b[0m",
                "\x1b[32mAnother very long piece of content\x1b[0m",
            ])
            .set_width(15);

        let output = table.to_string();
        assert!(max_visible_width(&output) <= 25);
        assert_eq!(max_visible_width(&output), 15);
        assert!(!table.to_html().is_empty());
    }

    #[test]
    fn very_long_single_cell() {
        let mut table = Table::new();
        table
            .set_header(["Long Content"])
            .add_row([format!("\x1b[36m{}\x1b[0m", "a".repeat(1000))])
            .set_width(30);

        // 30 - 4 overhead leaves 26 columns: ceil(1000 / 26) lines
        let layout = table.layout();
        assert_eq!(layout.rows()[0].height, 39);
        assert!(table.get_height() > 10);
        assert_eq!(max_visible_width(&table.to_string()), 30);

        let html = table.to_html();
        assert!(html.contains(&"a".repeat(1000)));
    }

    #[test]
    fn wrapped_lines_stay_colored() {
        let mut table = Table::new();
        table.add_row([format!("\x1b[36m{}\x1b[0m", "a".repeat(20))]).set_width(9);

        for line in table.to_string().lines().filter(|l| l.contains('a')) {
            assert!(line.contains("\x1b[36m"), "{:?}", line);
            assert!(line.contains("\x1b[0m"), "{:?}", line);
        }
    }

    #[test]
    fn width_smaller_than_overhead() {
        let mut table = Table::new();
        table.add_row(["abc", "def"]).set_width(2);
        let output = table.to_string();
        assert_eq!(table.get_height(), output.split('\n').count());
        assert!(strip_ansi_codes(&output).contains('a'));
    }

    #[test]
    fn large_table_of_tall_cells() {
        let cell = "?\n".repeat(75);
        let mut table = Table::new();
        table.set_header(["Column 1", "Column 2"]);
        for _ in 0..1000 {
            table.add_row([cell.as_str(), cell.as_str()]);
        }

        let output = table.to_string();
        assert!(!output.is_empty());
        // 76 lines per row, 999 separators, header, frame
        assert_eq!(table.get_height(), 1000 * 76 + 999 + 1 + 1 + 2);
        assert_eq!(table.get_height(), output.split('\n').count());
    }

    #[test]
    fn narrow_pattern_table() {
        let mut table = Table::new();
        table.set_header(["#1"]).set_width(7);
        for row in 0..1000 {
            table.add_row(["a".repeat(5 + (row * 17) % 6)]);
        }

        let output = table.to_string();
        assert!(output.contains('a'));
        assert!(table.get_height() > 2000);
        assert_eq!(max_visible_width(&output), 7);
    }

    #[test]
    fn two_column_pattern_table() {
        let mut table = Table::new();
        table.set_header(["#1", "#2"]).set_width(7);
        for row in 0..1000 {
            table.add_row([
                "a".repeat(5 + (row * 17) % 6),
                "a".repeat(5 + (row * 17 + 31) % 6),
            ]);
        }
        assert!(table.get_height() > 2000);
    }
}

mod html_output {
    use super::*;

    #[test]
    fn bold_cells_become_b_tags() {
        let mut table = Table::new();
        table
            .set_header(["\x1b[1mName\x1b[0m", "Value"])
            .add_row(["\x1b[1mbold\x1b[0m", "\x1b[31mred\x1b[0m"]);
        let html = table.to_html();
        assert!(html.contains("<b>"));
        assert!(html.contains("<th><b>Name</b></th>"));
        assert!(html.contains("<span style=\"color:#cd0000\">red</span>"));
        assert!(!html.contains('\x1b'));
    }

    #[test]
    fn multi_line_cell_uses_breaks() {
        let html = styled_table().to_html();
        assert!(html.contains("<br>"));
        assert!(html.contains("multi line stuff"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn html_not_wrapped_by_width() {
        let mut table = Table::new();
        table.add_row(["one two three four"]).set_width(8);
        assert!(table.to_html().contains("<td>one two three four</td>"));
    }

    #[test]
    fn malformed_sgr_conversion() {
        let html = convert_ansi_to_html(
            "\x1b[999mInvalid\x1b[0m \x1b[mIncomplete \x1b[31;99;999mOverload\x1b[0m Normal",
        );
        assert!(html.contains("Normal"));
        assert!(html.contains("Invalid") && html.contains("Incomplete"));
        assert!(!html.contains("\x1b["));
    }

    #[test]
    fn complex_nested_sequences() {
        let html = convert_ansi_to_html(
            "\x1b[1m\x1b[31m\x1b[4mBold Red Underlined\x1b[0m \x1b[42m\x1b[30mGreen BG Black Text\x1b[0m \x1b[38;5;196mBright Red\x1b[0m",
        );
        assert!(html.contains("<b>") && html.contains("<u>") && html.contains("background"));
        assert!(html.contains("color:#ff0000"));
    }
}
