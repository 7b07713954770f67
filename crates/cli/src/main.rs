#![deny(unsafe_code)]
//! CLI binary for color-studio.
//!
//! Subcommands:
//! - `inspect <color>`: every representation of one color
//! - `scheme <color>`: a harmony palette with each swatch's derivation
//! - `contrast <background> [<foreground>]`: WCAG ratio and AA/AAA flags
//! - `export <color>`: CSS, SCSS, Tailwind or JSON snippet
//! - `list`: available schemes, formats and export formats

mod error;

use clap::{Parser, Subcommand};
use color_studio_core::contrast::{self, COMMON_CONTRAST_COLORS};
use color_studio_core::export::{self, ExportFormat};
use color_studio_core::format::{self, ColorFormat};
use color_studio_core::palette::{self, Scheme, SchemeParams};
use color_studio_core::{ColorInfo, ColorValue, PaletteRecipe, Xorshift64};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "color-studio", about = "Color conversion, palettes and contrast checks")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every representation of a color.
    Inspect {
        /// Any supported color: hex, rgb(), hsl() or a CSS name.
        color: String,

        /// Print only this format (hex, rgb, hsl, cmyk).
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Generate a harmony palette from a base color.
    Scheme {
        /// Base color. Not needed with --recipe.
        #[arg(required_unless_present = "recipe")]
        color: Option<String>,

        /// complementary (default), analogous, triadic, tetradic,
        /// split-complementary, monochromatic or shades. Overrides a recipe's scheme.
        #[arg(short, long)]
        scheme: Option<String>,

        /// Hue offset for analogous and split-complementary (10-90). Overrides a recipe's angle.
        #[arg(short, long)]
        angle: Option<i64>,

        /// Palette size for monochromatic and shades (3-9). Overrides a recipe's count.
        #[arg(short, long)]
        count: Option<i64>,

        /// Scheme parameters as a JSON string; out-of-range values are clamped.
        #[arg(long)]
        params: Option<String>,

        /// Pick the angle at random from 10-70.
        #[arg(long, conflicts_with = "angle")]
        random_angle: bool,

        /// PRNG seed for --random-angle.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Load base color, scheme and parameters from a recipe file.
        #[arg(long, conflicts_with_all = ["color", "params"])]
        recipe: Option<PathBuf>,

        /// Print the recipe instead of the palette.
        #[arg(long)]
        emit_recipe: bool,
    },
    /// Check WCAG contrast between two colors.
    Contrast {
        background: String,

        /// Without a foreground, the background is checked against common text colors.
        foreground: Option<String>,
    },
    /// Print a stylesheet or config snippet for a color.
    Export {
        color: String,

        /// css, scss, tailwind or json.
        #[arg(short, long, default_value = "css")]
        format: String,

        /// Print a share link for this origin instead of a snippet.
        #[arg(long)]
        share: Option<String>,
    },
    /// List available schemes, formats and export formats.
    List,
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_recipe(path: &Path) -> Result<PaletteRecipe, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid recipe {}: {e}", path.display())))
}

/// Starts from the recipe file (or the base color and `--params`), then
/// applies the explicit flags on top. The result is validated.
#[allow(clippy::too_many_arguments)]
fn build_recipe(
    color: Option<String>,
    scheme: Option<&str>,
    angle: Option<i64>,
    count: Option<i64>,
    params: Option<String>,
    random_angle: bool,
    seed: u64,
    recipe: Option<PathBuf>,
) -> Result<PaletteRecipe, CliError> {
    let mut built = match recipe {
        Some(path) => {
            let loaded = load_recipe(&path)?;
            tracing::debug!(path = %path.display(), "loaded recipe");
            loaded
        }
        None => {
            let base: ColorValue = color.as_deref().unwrap_or_default().parse()?;
            let scheme_params = match params {
                Some(raw) => {
                    let value: serde_json::Value = serde_json::from_str(&raw)
                        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
                    SchemeParams::from_json(&value)
                }
                None => SchemeParams::default(),
            };
            PaletteRecipe::with_params(base, Scheme::Complementary, scheme_params)
        }
    };

    if let Some(name) = scheme {
        built.scheme = name.parse()?;
    }
    if let Some(a) = angle {
        built.angle = a;
    }
    if let Some(n) = count {
        built.count = n;
    }
    if random_angle {
        let suggested = palette::suggest_angle(&mut Xorshift64::new(seed));
        tracing::debug!(seed, angle = suggested, "suggested angle");
        built.angle = suggested as i64;
    }

    built.validate()?;
    Ok(built)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let schemes = Scheme::list_names();
            let formats = ColorFormat::list_names();
            let exports = ExportFormat::list_names();
            if cli.json {
                print_json(&serde_json::json!({
                    "schemes": schemes,
                    "formats": formats,
                    "export_formats": exports,
                }))?;
            } else {
                println!("Schemes:");
                for name in schemes {
                    println!("  {name}");
                }
                println!("Formats:");
                println!("  {}", formats.join(", "));
                println!("Export formats:");
                println!("  {}", exports.join(", "));
            }
        }
        Command::Inspect { color, format } => {
            let c: ColorValue = color.parse()?;
            if let Some(name) = format {
                let fmt: ColorFormat = name.parse()?;
                let out = format::format(&c, fmt);
                if cli.json {
                    print_json(&serde_json::json!({ "format": fmt, "value": out }))?;
                } else {
                    println!("{out}");
                }
                return Ok(());
            }

            let info = ColorInfo::from_color(&c);
            if cli.json {
                print_json(&serde_json::to_value(&info)?)?;
            } else {
                println!("hex   {}", info.hex);
                println!("rgb   {}", info.rgb_string);
                println!("hsl   {}", info.hsl_string);
                println!("cmyk  {}", info.cmyk_string);
                let marker = if info.exact_name { "" } else { "~" };
                println!("name  {marker}{}", info.name);
                println!(
                    "tone  {} (text {})",
                    if info.is_dark { "dark" } else { "light" },
                    format::to_hex(&info.text_color)
                );
            }
        }
        Command::Scheme {
            color,
            scheme,
            angle,
            count,
            params,
            random_angle,
            seed,
            recipe,
            emit_recipe,
        } => {
            let recipe = build_recipe(
                color,
                scheme.as_deref(),
                angle,
                count,
                params,
                random_angle,
                seed,
                recipe,
            )?;

            if emit_recipe {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
                return Ok(());
            }

            let palette = recipe.generate()?;
            tracing::info!(
                scheme = %palette.scheme(),
                base = %format::to_hex(&recipe.base),
                swatches = palette.len(),
                "generated palette"
            );

            if cli.json {
                print_json(&serde_json::to_value(&palette)?)?;
            } else {
                for swatch in palette.swatches() {
                    println!("{}  {}", format::to_hex(&swatch.color), swatch.derivation);
                }
            }
        }
        Command::Contrast {
            background,
            foreground,
        } => {
            let bg: ColorValue = background.parse()?;
            let foregrounds: Vec<ColorValue> = match foreground {
                Some(fg) => vec![fg.parse()?],
                None => COMMON_CONTRAST_COLORS.to_vec(),
            };

            let rows: Vec<_> = foregrounds
                .iter()
                .map(|fg| (fg, contrast::analyze(&bg, fg)))
                .collect();

            if cli.json {
                let items: Vec<_> = rows
                    .iter()
                    .map(|(fg, report)| {
                        serde_json::json!({
                            "background": format::to_hex(&bg),
                            "foreground": format::to_hex(fg),
                            "display_ratio": report.display_ratio(),
                            "report": report,
                        })
                    })
                    .collect();
                let value = match items.as_slice() {
                    [single] => single.clone(),
                    _ => serde_json::Value::Array(items),
                };
                print_json(&value)?;
            } else {
                let flag = |pass: bool| if pass { "pass" } else { "fail" };
                for (fg, report) in &rows {
                    println!(
                        "{} on {}  {:>8}  AA {} / AA-large {} / AAA {} / AAA-large {}",
                        format::to_hex(fg),
                        format::to_hex(&bg),
                        report.ratio_label(),
                        flag(report.aa_normal),
                        flag(report.aa_large),
                        flag(report.aaa_normal),
                        flag(report.aaa_large),
                    );
                }
            }
        }
        Command::Export {
            color,
            format,
            share,
        } => {
            let c: ColorValue = color.parse()?;
            if let Some(origin) = share {
                let link = export::share_link(&origin, &c);
                if cli.json {
                    print_json(&serde_json::json!({ "link": link }))?;
                } else {
                    println!("{link}");
                }
                return Ok(());
            }

            let fmt: ExportFormat = format.parse()?;
            let snippet = export::render(&c, fmt);
            if cli.json {
                print_json(&serde_json::json!({
                    "format": fmt,
                    "file_name": fmt.file_name(),
                    "content": snippet,
                }))?;
            } else {
                print!("{snippet}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
