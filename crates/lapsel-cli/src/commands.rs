//! Main commands enum and subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;
use std::path::PathBuf;

/// Available commands for the laptop catalog tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage cpu benchmark entries
    Cpu {
        #[command(subcommand)]
        command: ComponentCommand,
    },

    /// Manage gpu benchmark entries
    Gpu {
        #[command(subcommand)]
        command: ComponentCommand,
    },

    /// Manage laptop offers
    Laptop {
        #[command(subcommand)]
        command: LaptopCommand,
    },

    /// Rank laptops by weighted price/performance
    Rank {
        /// Cpu benchmark weight (0-1000)
        #[arg(long, default_value_t = 100)]
        cpu_weight: i64,
        /// Gpu benchmark weight (0-1000)
        #[arg(long, default_value_t = 0)]
        gpu_weight: i64,
        /// How many laptops to show
        #[arg(short, long, default_value_t = 10)]
        quantity: usize,
    },

    /// Import a JSON catalog file (cpus, gpus, laptops)
    Import {
        /// Path to the catalog file
        file: PathBuf,
    },

    /// Show the resolved database location
    Paths,
}

/// Subcommands shared by `cpu` and `gpu`.
#[derive(Subcommand)]
pub enum ComponentCommand {
    /// Add a benchmark entry
    Add {
        /// Component name (benchmark-site form)
        name: String,
        /// Source URL for the benchmark entry
        #[arg(long, default_value = "")]
        url: String,
        /// Benchmark score
        #[arg(long)]
        score: i64,
    },

    /// List all entries
    List,

    /// Remove an entry by id (cascades to referencing laptops)
    Remove {
        /// Database id of the entry
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Subcommands under `laptop`.
#[derive(Subcommand)]
pub enum LaptopCommand {
    /// Add a laptop offer
    Add {
        /// Product image URL
        #[arg(long, default_value = "")]
        image: String,
        /// Offer description
        #[arg(long)]
        description: String,
        /// Hardware composition string
        #[arg(long, default_value = "")]
        composition: String,
        /// Product page URL
        #[arg(long)]
        url: String,
        /// Price in minor currency units
        #[arg(long)]
        price: i64,
        /// Referenced cpu id (skips name resolution)
        #[arg(long, conflicts_with = "cpu")]
        cpu_id: Option<i64>,
        /// Referenced gpu id (skips name resolution)
        #[arg(long, conflicts_with = "gpu")]
        gpu_id: Option<i64>,
        /// Cpu name, fuzzy-resolved against the cpu table
        #[arg(long)]
        cpu: Option<String>,
        /// Gpu name, fuzzy-resolved against the gpu table
        #[arg(long)]
        gpu: Option<String>,
    },

    /// List all laptops
    List,

    /// Remove a laptop by id
    Remove {
        /// Database id of the laptop
        id: i64,
    },
}
