//! Catalog of the bundled mini-tools.

use serde::Serialize;

/// One entry in the tool catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    /// Stable identifier used for favorites (kebab-case)
    pub slug: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line summary
    pub description: &'static str,
}

const fn tool(slug: &'static str, name: &'static str, description: &'static str) -> ToolInfo {
    ToolInfo {
        slug,
        name,
        description,
    }
}

/// All bundled tools, in menu order.
pub const TOOLS: &[ToolInfo] = &[
    tool("calculator", "Calculator", "Basic arithmetic with running history"),
    tool(
        "unit-converter",
        "Unit Converter",
        "Length, weight, temperature, volume, time and storage units",
    ),
    tool(
        "currency-converter",
        "Currency Converter",
        "Convert between currencies with offline fallback rates",
    ),
    tool("color-picker", "Color Picker", "HEX, RGB and HSL values with color schemes"),
    tool("rgb-to-hex", "RGB to HEX", "Convert RGB channels to a hex code"),
    tool("age-calculator", "Age Calculator", "Exact age in years, months and days"),
    tool(
        "password-generator",
        "Password Generator",
        "Random passwords with selectable character sets",
    ),
    tool("hash-generator", "Hash Generator", "SHA-256, SHA-384 and SHA-512 digests of text"),
    tool(
        "number-base-converter",
        "Number Base Converter",
        "Binary, octal, decimal and hexadecimal",
    ),
    tool("json-formatter", "JSON Formatter", "Pretty-print and validate JSON"),
    tool("qr-generator", "QR Code Generator", "Generate QR codes from text or URLs"),
    tool("bmi-calculator", "BMI Calculator", "Body mass index from height and weight"),
    tool("tip-calculator", "Tip Calculator", "Split bills and compute tips"),
    tool("loan-calculator", "Loan Calculator", "Monthly payments and total interest"),
    tool("percentage-calculator", "Percentage Calculator", "Percent of, percent change and ratios"),
    tool("word-counter", "Word Counter", "Count words, characters and sentences"),
    tool("case-converter", "Case Converter", "UPPER, lower, Title and camelCase text"),
    tool("lorem-ipsum", "Lorem Ipsum Generator", "Placeholder paragraphs and sentences"),
    tool("base64", "Base64 Encoder", "Encode and decode Base64 text"),
    tool("url-encoder", "URL Encoder", "Percent-encode and decode URLs"),
    tool("url-shortener", "URL Shortener", "Shorten long links"),
    tool("timer", "Timer & Stopwatch", "Countdown timer and lap stopwatch"),
    tool("pomodoro", "Pomodoro Timer", "Focus and break intervals"),
    tool("random-number", "Random Number Generator", "Random integers in a range"),
    tool("weather", "Weather", "Current conditions for a city"),
    tool("ip-lookup", "IP Lookup", "Location details for an IP address"),
    tool("crypto-prices", "Crypto Prices", "Live cryptocurrency prices"),
    tool("text-to-speech", "Text to Speech", "Read text aloud"),
    tool("speech-to-text", "Speech to Text", "Transcribe spoken input"),
    tool("voice-recorder", "Voice Recorder", "Record and download audio clips"),
    tool("image-converter", "Image Converter", "Convert images between PNG, JPEG and WebP"),
    tool("isomer-diagram", "Isomer Diagram", "Draw structural isomer diagrams"),
    tool("ai-chat", "AI Chat", "Chat assistant with short history"),
];

/// Finds a tool by slug.
#[must_use]
pub fn find_tool(slug: &str) -> Option<&'static ToolInfo> {
    TOOLS.iter().find(|t| t.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_unique_and_kebab_case() {
        let mut seen = HashSet::new();
        for t in TOOLS {
            assert!(seen.insert(t.slug), "duplicate slug {}", t.slug);
            assert!(
                t.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not kebab-case",
                t.slug
            );
        }
    }

    #[test]
    fn test_find_tool() {
        assert_eq!(find_tool("calculator").map(|t| t.name), Some("Calculator"));
        assert!(find_tool("nope").is_none());
    }
}
