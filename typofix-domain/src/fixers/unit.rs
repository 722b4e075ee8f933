//! A no-break space between a number and its unit (12 h, 50 €, 25 %).
//!
//! Modeled on JoliTypo's Unit fixer. A match whose line prefix is only
//! Markdown heading markers is skipped, so `# 1h` style tokens survive.

use super::{Fixer, FixerExample, FixerMeta, line_prefix};
use regex::Regex;
use std::sync::LazyLock;
use typofix_chars::NO_BREAK_SPACE;
use typofix_types::{FixerCategory, Locale};

static HEADING_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\S\r\n]*#+[^\S\r\n]*$").expect("HEADING_MARKERS pattern is valid")
});

static UNIT_RULES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    let n = NO_BREAK_SPACE;
    let join = format!("${{1}}{n}${{2}}");
    let rule = |pattern: &str, replacement: &str| {
        (
            Regex::new(pattern).expect("unit pattern is valid"),
            replacement.to_string(),
        )
    };
    vec![
        // time
        rule(r"(\d+)[^\S\r\n]*([hms])\b", &join),
        rule(r"(?i)(\d+)[^\S\r\n]*(heures?|minutes?|secondes?)\b", &join),
        // currency
        rule(r"(\d+)[^\S\r\n]*([€$£¥₹₽])", &join),
        rule(r"(?i)(\d+)[^\S\r\n]*(euros?|dollars?|livres?)\b", &join),
        // percent
        rule(r"(\d+(?:[,.]?\d+)?)[^\S\r\n]*%", &format!("${{1}}{n}%")),
        // mass
        rule(r"(?i)(\d+(?:[,.]?\d+)?)[^\S\r\n]*(mg|[cdk]?g|tonnes?)\b", &join),
        // length
        rule(r"(?i)(\d+(?:[,.]?\d+)?)[^\S\r\n]*(mm|cm|dm|[dk]?m|km)\b", &join),
        // volume
        rule(r"(?i)(\d+(?:[,.]?\d+)?)[^\S\r\n]*(ml|[cdk]?l|litres?)\b", &join),
        // power and energy
        rule(r"(\d+(?:[,.]?\d+)?)[^\S\r\n]*([kmMG]?Wh?)\b", &join),
        // frequency
        rule(r"(\d+(?:[,.]?\d+)?)[^\S\r\n]*([kmMG]?Hz)\b", &join),
        // temperature
        rule(
            r"(\d+(?:[,.]?\d+)?)[^\S\r\n]*°([CF]?)\b",
            &format!("${{1}}{n}°${{2}}"),
        ),
        // data size
        rule(r"(\d+(?:[,.]?\d+)?)[^\S\r\n]*([kmMGT]?[Bbo])\b", &join),
        rule(r"(?i)(\d+(?:[,.]?\d+)?)[^\S\r\n]*(octets?|bytes?|bits?)\b", &join),
        // angles
        rule(r"(?i)(\d+(?:[,.]?\d+)?)[^\S\r\n]*(degrés?|rad|radians?)\b", &join),
        // speed
        rule(r"(?i)(\d+(?:[,.]?\d+)?)[^\S\r\n]*(km/h|mph|m/s)\b", &join),
    ]
});

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "unit",
            name: "Unit spacing",
            description: "Inserts a no-break space between numbers and units (12 h, 50 €, 25 %)",
            category: FixerCategory::Spacing,
            priority: 7,
            default_enabled: true,
            locale_sensitive: false,
        },
        fix,
        None,
        example,
    )
}

fn fix(text: &str, _locale: &Locale) -> anyhow::Result<String> {
    let mut out = text.to_string();
    for (re, replacement) in UNIT_RULES.iter() {
        out = replace_outside_headings(&out, re, replacement);
    }
    Ok(out)
}

/// Like `replace_all`, but a match whose line prefix is nothing but `#`
/// markers is copied through unchanged.
fn replace_outside_headings(text: &str, re: &Regex, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let m = caps.get(0).expect("group 0 always participates");
        out.push_str(&text[last..m.start()]);
        if HEADING_MARKERS.is_match(line_prefix(text, m.start())) {
            out.push_str(m.as_str());
        } else {
            caps.expand(replacement, &mut out);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

fn example(_locale: &Locale) -> FixerExample {
    let n = NO_BREAK_SPACE;
    FixerExample {
        before: "Température: 25 °C, vitesse: 120 km/h, poids: 75 kg, prix: 299 €".to_string(),
        after: format!(
            "Température: 25{n}°C, vitesse: 120{n}km/h, poids: 75{n}kg, prix: 299{n}€"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fix(text: &str) -> String {
        super::fix(text, &Locale::default()).unwrap()
    }

    #[test]
    fn short_time_units() {
        assert_eq!(fix("Durée: 2h"), "Durée: 2\u{00A0}h");
        assert_eq!(fix("pause de 10 min?"), "pause de 10 min?");
        assert_eq!(fix("10 s plus tard"), "10\u{00A0}s plus tard");
    }

    #[test]
    fn currency_and_percent() {
        assert_eq!(fix("prix: 299€"), "prix: 299\u{00A0}€");
        assert_eq!(fix("50 %"), "50\u{00A0}%");
        assert_eq!(fix("12,5 % de plus"), "12,5\u{00A0}% de plus");
    }

    #[test]
    fn metric_units() {
        assert_eq!(fix("75 kg et 1.8 m"), "75\u{00A0}kg et 1.8\u{00A0}m");
        assert_eq!(fix("120 km/h"), "120\u{00A0}km/h");
        assert_eq!(fix("25 °C"), "25\u{00A0}°C");
        assert_eq!(fix("2 GHz et 16 Go"), "2\u{00A0}GHz et 16\u{00A0}Go");
    }

    #[test]
    fn heading_marker_numbers_are_skipped() {
        assert_eq!(fix("# 1h"), "# 1h");
        assert_eq!(fix("## 2 h"), "## 2 h");
        // Only the marker prefix is protected, not the whole heading.
        assert_eq!(fix("# Durée 2h"), "# Durée 2\u{00A0}h");
    }

    #[test]
    fn numbers_inside_words_are_untouched() {
        assert_eq!(fix("2hz30"), "2hz30");
        assert_eq!(fix("les années 1990"), "les années 1990");
    }

    #[test]
    fn idempotent() {
        let once = fix("25 °C, 120 km/h, 299 €, 50 %");
        assert_eq!(fix(&once), once);
    }
}
