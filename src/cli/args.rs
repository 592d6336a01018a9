//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--file <path>` / `-f`: Operate on this document file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tagtree - A Rust-native CLI for editing nested tagged trees
#[derive(Parser, Debug)]
#[command(name = "tt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Document file to operate on (default: configured default_document)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    // ========== Document Commands ==========
    /// Create a fresh document with an empty root
    #[command(
        name = "new",
        long_about = "Create a fresh document with an empty root.\n\n\
            The new tree is the editing seed: a root with no children. An empty \
            root is allowed while editing but is stored in its minimal name-only \
            form; add children with 'tt add .'.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Start a new tree in the default document file
    tt new

    # Name the root and pick a file
    tt new --name inventory -f inventory.json"
    )]
    New {
        /// Name of the root node
        #[arg(long, default_value = "root")]
        name: String,

        /// Overwrite an existing document file
        #[arg(long)]
        force: bool,
    },

    /// Display the tree with per-node paths
    #[command(
        name = "show",
        long_about = "Display the document's tree in an indented layout.\n\n\
            Every line starts with the path that addresses that node, so the \
            output can be pasted straight into edit commands. Leaves show their \
            payload after '='.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show the whole tree
    tt show

    # Only the top two levels
    tt show --depth 2

READING THE OUTPUT:
    . root              <- the root (path '.')
    ├── 0 drafts        <- parent at path 0
    │   └── 0.0 intro = \"Data\"
    └── 1 notes = \"\"    <- leaf with an empty payload"
    )]
    Show {
        /// Limit rendering depth
        #[arg(long)]
        depth: Option<usize>,
    },

    // ========== Edit Commands ==========
    /// Append a new default child to a node
    #[command(
        name = "add",
        long_about = "Append a new default child ({name: \"New Child\", data: \"Data\"}) \
            to the node at PATH.\n\n\
            If the target is a leaf, it is converted to a parent first: its name \
            is kept, its payload is discarded, and the new child becomes its only \
            child. This is the only edit that converts a leaf into a parent.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Add a child under the root
    tt add .

    # Add a grandchild under the second child
    tt add 1"
    )]
    Add {
        /// Path of the node to add a child to
        path: String,
    },

    /// Rename a node
    #[command(
        name = "rename",
        long_about = "Set the name of the node at PATH.\n\n\
            The name is trimmed; if nothing remains it falls back to the literal \
            'Unnamed'. Payloads are never touched by rename."
    )]
    Rename {
        /// Path of the node to rename
        path: String,

        /// New name
        name: String,
    },

    /// Set a leaf's payload
    #[command(
        name = "data",
        long_about = "Replace the payload of the leaf at PATH, verbatim.\n\n\
            No trimming, no fallback: the empty string is a valid payload. \
            Fails if the target is a parent."
    )]
    Data {
        /// Path of the leaf to edit
        path: String,

        /// New payload
        data: String,
    },

    /// Delete a child of a node
    #[command(
        name = "delete",
        long_about = "Delete the child at INDEX from the parent at PATH.\n\n\
            Deleting the last child collapses the parent into a leaf with the \
            default payload 'Data' - an empty parent is not a persisted state.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Delete the first child of the root
    tt delete . 0

    # Delete the third child of node 1.2
    tt delete 1.2 2"
    )]
    Delete {
        /// Path of the parent node
        path: String,

        /// Zero-based index of the child to delete
        index: usize,
    },

    /// Replace a subtree wholesale
    #[command(
        name = "replace",
        long_about = "Replace the node at PATH with a subtree given as canonical \
            JSON.\n\n\
            The replacement is validated: a node carrying both children and data \
            is rejected. Use '-' as FILE to read from stdin.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Replace from an inline JSON string
    tt replace 0 --json '{\"name\":\"intro\",\"data\":\"hello\"}'

    # Replace the root from a file
    tt replace . --from subtree.json"
    )]
    Replace {
        /// Path of the node to replace
        path: String,

        /// Replacement subtree as canonical JSON
        #[arg(long, conflicts_with = "from")]
        json: Option<String>,

        /// Read the replacement subtree from this file ('-' for stdin)
        #[arg(long)]
        from: Option<PathBuf>,
    },

    // ========== Export / Status ==========
    /// Print the canonical tree as pretty JSON
    #[command(
        name = "export",
        long_about = "Print the canonical form of the document's tree as \
            pretty-printed JSON.\n\n\
            The canonical form is minimal: children only when non-empty, data \
            only for leaves, and a bare name for the empty root. Output is \
            deterministic, so exports diff cleanly."
    )]
    Export,

    /// Show document id, fingerprint, and server linkage
    #[command(
        name = "status",
        long_about = "Show the document's server id (if saved), the fingerprint \
            of its canonical form, and whether it diverges from the server copy.\n\n\
            Checking divergence fetches the server copy and compares fingerprints; \
            use --local to skip the network."
    )]
    Status {
        /// Do not contact the server
        #[arg(long)]
        local: bool,
    },

    // ========== Server Commands ==========
    /// List trees stored on the server
    #[command(
        name = "list",
        long_about = "List all trees stored on the server, one line per tree \
            with its id and root name."
    )]
    List,

    /// Fetch a server tree into the document
    #[command(
        name = "pull",
        long_about = "Fetch the server tree with the given id and write it to \
            the document file, overwriting local content.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Pull tree 7 into the default document
    tt pull 7

    # Pull into a specific file
    tt pull 7 -f seven.json"
    )]
    Pull {
        /// Server id of the tree to fetch
        id: u64,

        /// Overwrite an existing document file
        #[arg(long)]
        force: bool,
    },

    /// Save the document to the server
    #[command(
        name = "save",
        long_about = "Save the document's canonical tree to the server.\n\n\
            A never-saved document is created and receives its server id; a \
            saved one is updated in place. The server's response is \
            authoritative and replaces the local tree. If the save fails, the \
            local document is left exactly as it was."
    )]
    Save,

    // ========== Setup Commands ==========
    /// Get, set, or list configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    tt completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    tt completion zsh >> ~/.zshrc

    # Fish
    tt completion fish > ~/.config/fish/completions/tt.fish

    # PowerShell
    tt completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Key to get (server_url, default_document)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Key to set
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
