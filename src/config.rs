use clap::Parser;
use std::net::SocketAddr;

/// Server settings, all overridable on the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "diskviz")]
#[command(about = "Disk usage and folder snapshot dashboard", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// SQLite database file
    #[arg(long, default_value = "diskviz.sqlite3")]
    pub db: String,

    /// Schema applied at startup
    #[arg(long, default_value = "sql/schema.sql")]
    pub schema: String,

    /// Demo data applied after the schema
    #[arg(long, default_value = "sql/seed.sql")]
    pub seed: String,

    /// Skip loading the demo data
    #[arg(long)]
    pub no_seed: bool,

    /// Worker threads serving requests
    #[arg(long, default_value_t = 8)]
    pub workers: usize,

    /// Password for the admin role
    #[arg(long, default_value = "admin")]
    pub admin_password: String,

    /// Password for the user role
    #[arg(long, default_value = "user")]
    pub user_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cfg = Config::parse_from(["diskviz"]);
        assert_eq!(cfg.addr.port(), 3000);
        assert_eq!(cfg.workers, 8);
        assert!(!cfg.no_seed);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::parse_from([
            "diskviz",
            "--addr",
            "0.0.0.0:8080",
            "--no-seed",
            "--admin-password",
            "s3cret",
        ]);
        assert_eq!(cfg.addr.port(), 8080);
        assert!(cfg.no_seed);
        assert_eq!(cfg.admin_password, "s3cret");
    }
}
