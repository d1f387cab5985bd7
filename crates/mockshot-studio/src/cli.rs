use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use mockshot_engine::icon::{IconDesign, IconSizeSet};

#[derive(Parser, Debug)]
#[command(
    name = "mockshot-studio",
    version,
    about = "Render mock app screens and multi-resolution app icons to PNG"
)]
pub struct Cli {
    /// studio.toml with palette overrides, fonts, icon sizes and output settings
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Regular font face (TTF/OTF); without one, text is laid out but not drawn
    #[arg(long, global = true, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Bold font face; defaults to the regular face
    #[arg(long = "bold-font", global = true, value_name = "FILE")]
    pub bold_font: Option<PathBuf>,

    /// Render threads (1 = sequential, 0 = one per core)
    #[arg(short, long, global = true, value_name = "N")]
    pub jobs: Option<usize>,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every `.msml` scene in a directory
    Scenes {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        /// Output directory (default: `[output].dir` from the config)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Render one icon design at every configured size
    Icons {
        #[arg(long, value_enum, default_value_t = DesignArg::Chat)]
        design: DesignArg,
        /// Comma-separated sizes, e.g. `1024,180,60x40`
        #[arg(long, value_name = "SIZES")]
        sizes: Option<IconSizeSet>,
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Render the MindBridge logo (800x300) and GitHub avatar (400x400)
    Brand {
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Render the bundled screens, both icon sets and the brand images
    Demo {
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DesignArg {
    /// Speech bubbles and an "AI" badge on a sky gradient
    Chat,
    /// Two nodes joined by a bridge on the brand gradient
    Brand,
}

impl DesignArg {
    pub fn design(self) -> IconDesign {
        match self {
            DesignArg::Chat => IconDesign::chat_bubbles(),
            DesignArg::Brand => IconDesign::brain_bridge(),
        }
    }

    pub fn dir_name(self) -> &'static str {
        match self {
            DesignArg::Chat => "chat",
            DesignArg::Brand => "brand",
        }
    }
}
