use clap::{Args, Parser, Subcommand};

pub const DEFAULT_STORE_DIR: &str = "./data";
pub const STORE_ENV_VAR: &str = "ROLLCALL_STORE";

#[derive(Parser, Debug)]
#[command(name = "rollcall", version, about = "Classroom data spot-check CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Data store directory (falls back to ROLLCALL_STORE, then ./data)"
    )]
    pub store: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check each record's declared count against its document field
    Verify {
        collection: String,
        #[command(flatten)]
        fields: FieldArgs,
        #[arg(long, help = "Only fetch records owned by this id")]
        owner: Option<String>,
        #[arg(long, help = "Only fetch records whose owner matches this pattern")]
        owner_match: Option<String>,
        #[arg(long, default_value_t = false, help = "Print only inconsistent rows")]
        only_inconsistent: bool,
    },
    /// Aggregate consistency totals for a collection
    Summary {
        collection: String,
        #[command(flatten)]
        fields: FieldArgs,
        #[arg(long, help = "Only fetch records owned by this id")]
        owner: Option<String>,
        #[arg(long, help = "Only fetch records whose owner matches this pattern")]
        owner_match: Option<String>,
    },
    /// Row counts for every collection in the store
    Counts,
    /// Row count and field names of the first record in a collection
    Peek { collection: String },
    /// Write the embedded curriculum units as text files
    Export {
        #[arg(long, default_value = "./curriculum")]
        out: String,
    },
}

#[derive(Args, Debug)]
pub struct FieldArgs {
    #[arg(long, default_value = "assignments", help = "Document-valued field")]
    pub document_field: String,
    #[arg(
        long,
        default_value = "assignment_count",
        help = "Declared counter field"
    )]
    pub count_field: String,
    #[arg(long, default_value = "id", help = "Record identifier field")]
    pub id_field: String,
    #[arg(long, default_value = "student_id", help = "Owner/grouping field")]
    pub owner_field: String,
}
