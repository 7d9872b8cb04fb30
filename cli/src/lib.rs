use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use brushwork_theme::api::{DecorationsPayload, ThemePayload};
use brushwork_theme::{
    ColorPair, DEFAULT_ANGLE, Gradient, HexColor, Opacity, PALETTE, Role, Viewport,
    complementary_colors, layer, particle_field, random_splash, splash_layer,
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

/// Environment variable consulted when `--seed` is absent.
pub const SEED_ENV: &str = "BRUSHWORK_SEED";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "brushwork",
    author,
    version,
    about = "Emit the Brushwork site's palette, gradients and paint splash decorations",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write the result to this file instead of stdout
    #[arg(long, global = true, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the fixed palette
    Palette {
        /// Emit the full theme payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a CSS linear-gradient from a palette role or a `#start:#end` pair
    Gradient {
        #[arg(value_name = "ROLE_OR_PAIR")]
        colors: String,
        #[arg(long, default_value = DEFAULT_ANGLE)]
        angle: String,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        opacity: f64,
    },
    /// Draw random paint splash colors
    Splash {
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        opacity: f64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Derive complement, lighter and darker variants of a hex color
    Complement {
        #[arg(value_name = "HEX")]
        color: String,
        #[arg(long)]
        json: bool,
    },
    /// Generate a paint texture overlay as JSON
    Layer {
        #[arg(long, default_value_t = layer::DEFAULT_SPLASH_COUNT)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate hero background particles as JSON
    Particles {
        /// Viewport width in pixels; widths up to 768 use the mobile layout
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate splashes, particles and backdrop blobs in one payload
    Decorations {
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let rendered = render(&cli.command)?;

    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "failed to create output parent directory '{}'",
                            parent.display()
                        )
                    })?;
                }
            }
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write output to '{}'", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    info!(
        target: "brushwork::cli",
        command = command_name(&cli.command),
        bytes = rendered.len(),
        "command completed"
    );

    Ok(())
}

/// Renders a command's output, newline-terminated.
pub fn render(command: &Command) -> Result<String> {
    let mut out = match command {
        Command::Palette { json: true } => {
            to_json(&ThemePayload::new(DEFAULT_ANGLE, Opacity::OPAQUE))?
        }
        Command::Palette { json: false } => render_palette(),
        Command::Gradient {
            colors,
            angle,
            opacity,
        } => {
            let opacity = Opacity::new(*opacity)?;
            with_pair(colors, |pair| {
                Gradient::new(pair).angle(angle).opacity(opacity).css()
            })?
        }
        Command::Splash {
            opacity,
            count,
            seed,
        } => {
            let mut rng = source(*seed)?;
            let colors = (0..*count)
                .map(|_| random_splash(&mut rng, *opacity))
                .collect::<Result<Vec<_>, _>>()?;
            colors.join("\n")
        }
        Command::Complement { color, json } => {
            let derived = complementary_colors(color)?;
            if *json {
                to_json(&derived)?
            } else {
                format!(
                    "complement {}\nlighter    {}\ndarker     {}",
                    derived.complement, derived.lighter, derived.darker
                )
            }
        }
        Command::Layer { count, seed } => to_json(&splash_layer(&mut source(*seed)?, *count))?,
        Command::Particles { width, seed } => {
            to_json(&particle_field(&mut source(*seed)?, viewport(*width)))?
        }
        Command::Decorations { width, seed } => to_json(&DecorationsPayload::generate(
            &mut source(*seed)?,
            viewport(*width),
        ))?,
    };

    out.push('\n');
    Ok(out)
}

/// `--seed`, then `BRUSHWORK_SEED`, then a fresh seed from the thread RNG.
pub fn resolve_seed(seed: Option<u64>) -> Result<Option<u64>> {
    if seed.is_some() {
        return Ok(seed);
    }

    match env::var(SEED_ENV) {
        Ok(value) => {
            let parsed = value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got '{value}'"))?;
            Ok(Some(parsed))
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(anyhow!(err).context(format!("failed to read {SEED_ENV}"))),
    }
}

fn source(seed: Option<u64>) -> Result<StdRng> {
    let rng = match resolve_seed(seed)? {
        Some(seed) => {
            debug!(seed, "using seeded splash source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };
    Ok(rng)
}

fn viewport(width: Option<u32>) -> Viewport {
    width.map(Viewport::from_width).unwrap_or_default()
}

fn with_pair<T>(spec: &str, f: impl FnOnce(ColorPair<'_>) -> T) -> Result<T> {
    match spec.split_once(':') {
        Some((start, end)) => {
            HexColor::parse(start).with_context(|| format!("invalid gradient start in '{spec}'"))?;
            HexColor::parse(end).with_context(|| format!("invalid gradient end in '{spec}'"))?;
            Ok(f(ColorPair::new(start, end)))
        }
        None => {
            let role: Role = spec.parse()?;
            Ok(f(PALETTE.role(role)))
        }
    }
}

fn render_palette() -> String {
    let mut lines: Vec<String> = Role::ALL
        .into_iter()
        .map(|role| {
            let pair = PALETTE.role(role);
            format!("{:<12}{} -> {}", role.name(), pair.start, pair.end)
        })
        .collect();
    lines.push(format!(
        "{:<12}{}",
        "paintSplash",
        PALETTE.paint_splash.join(" ")
    ));
    lines.join("\n")
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Palette { .. } => "palette",
        Command::Gradient { .. } => "gradient",
        Command::Splash { .. } => "splash",
        Command::Complement { .. } => "complement",
        Command::Layer { .. } => "layer",
        Command::Particles { .. } => "particles",
        Command::Decorations { .. } => "decorations",
    }
}
