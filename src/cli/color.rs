//! Color picker commands: inspect, derive schemes, check contrast, and
//! manage saved colors.

use crate::cli::common::{load_config, open_saved_colors, print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{RgbColor, SavedColor};
use crate::services::ColorScheme;
use clap::{Args, Subcommand};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("rgb() pattern is valid")
});

static HSL_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*(\d{1,3})\s*,\s*(\d{1,3})%?\s*,\s*(\d{1,3})%?\s*\)$")
        .expect("hsl() pattern is valid")
});

/// Inspect and manage colors
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Color subcommand
    #[command(subcommand)]
    pub command: ColorCommand,
}

/// Color subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ColorCommand {
    /// Show HEX, RGB and HSL forms of a color
    Info(ColorInfoArgs),
    /// Generate a named color scheme from a base color
    Scheme(ColorSchemeArgs),
    /// WCAG contrast ratio between two colors
    Contrast(ColorContrastArgs),
    /// Save a color to the saved list
    Save(ColorSaveArgs),
    /// List saved colors, newest first
    List(ColorListArgs),
    /// Remove a saved color by id
    Remove(ColorRemoveArgs),
    /// Remove all saved colors
    Clear,
}

/// Show HEX, RGB and HSL forms of a color
#[derive(Debug, Clone, Args)]
pub struct ColorInfoArgs {
    /// Color as #RRGGBB, rgb(r, g, b) or hsl(h, s%, l%)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Generate a named color scheme
#[derive(Debug, Clone, Args)]
pub struct ColorSchemeArgs {
    /// Base color
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Scheme kind (complementary, analogous, triadic, tetradic, monochromatic)
    #[arg(short, long, value_name = "KIND")]
    pub kind: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// WCAG contrast ratio between two colors
#[derive(Debug, Clone, Args)]
pub struct ColorContrastArgs {
    /// Foreground color
    #[arg(value_name = "FOREGROUND")]
    pub foreground: String,

    /// Background color
    #[arg(value_name = "BACKGROUND")]
    pub background: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Save a color
#[derive(Debug, Clone, Args)]
pub struct ColorSaveArgs {
    /// Color to save
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Label for the color (defaults to its hex code)
    #[arg(short, long, value_name = "NAME", default_value = "")]
    pub name: String,
}

/// List saved colors
#[derive(Debug, Clone, Args)]
pub struct ColorListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Remove a saved color
#[derive(Debug, Clone, Args)]
pub struct ColorRemoveArgs {
    /// Id printed by `color list`
    #[arg(value_name = "ID")]
    pub id: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ColorInfoResponse {
    hex: String,
    rgb: RgbColor,
    hsl: HslResponse,
    css: String,
    text_color: String,
}

/// HSL rounded to whole degrees and percentages
#[derive(Debug, Serialize)]
struct HslResponse {
    h: u16,
    s: u8,
    l: u8,
}

#[derive(Debug, Serialize)]
struct ColorSchemeResponse {
    base: String,
    scheme: ColorScheme,
    colors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ContrastResponse {
    foreground: String,
    background: String,
    ratio: f64,
    aa_normal: bool,
    aa_large: bool,
    aaa_normal: bool,
}

#[derive(Debug, Serialize)]
struct SavedColorsResponse {
    colors: Vec<SavedColor>,
    count: usize,
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ColorCommand::Info(args) => args.execute(),
            ColorCommand::Scheme(args) => args.execute(),
            ColorCommand::Contrast(args) => args.execute(),
            ColorCommand::Save(args) => args.execute(),
            ColorCommand::List(args) => args.execute(),
            ColorCommand::Remove(args) => args.execute(),
            ColorCommand::Clear => execute_clear(),
        }
    }
}

impl ColorInfoArgs {
    /// Execute the info command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let color = parse_color(&self.color)?;
        let hsl = color.to_hsl();
        let (h, s, l) = hsl.rounded();
        let response = ColorInfoResponse {
            hex: format_hex(color, &config),
            rgb: color,
            hsl: HslResponse { h, s, l },
            css: color.to_css(),
            text_color: format_hex(color.readable_text_color(), &config),
        };

        if self.json {
            return print_json(&response);
        }

        println!("HEX: {}", response.hex);
        println!("RGB: {}", response.css);
        println!("HSL: {hsl}");
        println!("Text: {}", response.text_color);
        Ok(())
    }
}

impl ColorSchemeArgs {
    /// Execute the scheme command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let base = parse_color(&self.color)?;
        let scheme: ColorScheme = self
            .kind
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let colors: Vec<String> = scheme
            .generate(base)
            .into_iter()
            .map(|c| format_hex(c, &config))
            .collect();

        if self.json {
            return print_json(&ColorSchemeResponse {
                base: format_hex(base, &config),
                scheme,
                colors,
            });
        }

        println!("{} scheme for {}:", scheme, format_hex(base, &config));
        for hex in colors {
            println!("  {hex}");
        }
        Ok(())
    }
}

impl ColorContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let fg = parse_color(&self.foreground)?;
        let bg = parse_color(&self.background)?;
        let ratio = fg.contrast_ratio(&bg);

        let response = ContrastResponse {
            foreground: format_hex(fg, &config),
            background: format_hex(bg, &config),
            ratio,
            aa_normal: ratio >= 4.5,
            aa_large: ratio >= 3.0,
            aaa_normal: ratio >= 7.0,
        };

        if self.json {
            return print_json(&response);
        }

        println!(
            "{} on {}: {:.2}:1",
            response.foreground, response.background, ratio
        );
        println!("  AA normal text:  {}", pass_fail(response.aa_normal));
        println!("  AA large text:   {}", pass_fail(response.aa_large));
        println!("  AAA normal text: {}", pass_fail(response.aaa_normal));
        Ok(())
    }
}

impl ColorSaveArgs {
    /// Execute the save command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let color = parse_color(&self.color)?;
        let mut saved = open_saved_colors(&config)?;
        let record = saved
            .save(color, &self.name)
            .map_err(|e| CliError::io(format!("Failed to save color: {e:#}")))?;

        println!("Saved {} as '{}' ({})", record.hex, record.name, record.id);
        Ok(())
    }
}

impl ColorListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let colors = open_saved_colors(&config)?.list();

        if self.json {
            let count = colors.len();
            return print_json(&SavedColorsResponse { colors, count });
        }

        if colors.is_empty() {
            println!("No saved colors");
            return Ok(());
        }

        for color in colors {
            println!("{}  {:<24} {}", color.hex, color.name, color.id);
        }
        Ok(())
    }
}

impl ColorRemoveArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut saved = open_saved_colors(&config)?;
        let removed = saved
            .remove(&self.id)
            .map_err(|e| CliError::io(format!("Failed to remove color: {e:#}")))?;

        if !removed {
            return Err(CliError::validation(format!(
                "No saved color with id '{}'",
                self.id
            )));
        }

        println!("Removed color {}", self.id);
        Ok(())
    }
}

fn execute_clear() -> CliResult<()> {
    let config = load_config()?;
    open_saved_colors(&config)?
        .clear()
        .map_err(|e| CliError::io(format!("Failed to clear saved colors: {e:#}")))?;
    println!("Cleared saved colors");
    Ok(())
}

/// Parses `#RRGGBB`, `rgb(r, g, b)` or `hsl(h, s%, l%)`.
fn parse_color(input: &str) -> CliResult<RgbColor> {
    let trimmed = input.trim().to_lowercase();

    if let Some(caps) = RGB_FUNCTION.captures(&trimmed) {
        let channel = |i: usize| -> CliResult<u8> {
            caps[i].parse::<u8>().map_err(|_| {
                CliError::validation(format!(
                    "RGB channel out of range (0-255): {}",
                    &caps[i]
                ))
            })
        };
        return Ok(RgbColor::new(channel(1)?, channel(2)?, channel(3)?));
    }

    if let Some(caps) = HSL_FUNCTION.captures(&trimmed) {
        let component = |i: usize, max: f64, name: &str| -> CliResult<f64> {
            let value: f64 = caps[i]
                .parse()
                .map_err(|_| CliError::validation(format!("Invalid {name}: {}", &caps[i])))?;
            if value > max {
                return Err(CliError::validation(format!(
                    "{name} out of range (0-{max}): {value}"
                )));
            }
            Ok(value)
        };
        let h = component(1, 359.0, "hue")?;
        let s = component(2, 100.0, "saturation")?;
        let l = component(3, 100.0, "lightness")?;
        return Ok(RgbColor::from_hsl(h, s, l));
    }

    RgbColor::from_hex(&trimmed).map_err(|_| {
        CliError::validation(format!(
            "Invalid color '{}'. Use #RRGGBB, rgb(r, g, b) or hsl(h, s%, l%)",
            input.trim()
        ))
    })
}

fn format_hex(color: RgbColor, config: &Config) -> String {
    if config.display.uppercase_hex {
        color.to_hex()
    } else {
        color.to_hex_lower()
    }
}

const fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "pass"
    } else {
        "fail"
    }
}
