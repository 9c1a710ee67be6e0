use anyhow::Result;
use clap::Parser;
use clever_lint_migrate::migrate::migrate;
use std::path::PathBuf;

/// clever-lint-migrate - enable the @clever app.listen rule in a project
///
/// Installs eslint and @clever/eslint-plugin when missing, registers the
/// plugin and the no-app-listen-without-localhost rule in .eslintrc.js or
/// .eslintrc.yml, then runs eslint --fix on the files calling app.listen.
///
/// Requires npm and ripgrep (rg) on PATH.
#[derive(Parser, Debug)]
#[command(author, version = env!("MIGRATE_VERSION"), about)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(long = "dir", short = 'C', value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = clever_lint_migrate::runtime::RealRuntime;

    migrate(runtime, cli.dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::try_parse_from(["clever-lint-migrate"]).unwrap();
        assert_eq!(cli.dir, None);
    }

    #[test]
    fn test_cli_dir_parsing() {
        let cli = Cli::try_parse_from(["clever-lint-migrate", "--dir", "/tmp/app"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/app")));

        let cli = Cli::try_parse_from(["clever-lint-migrate", "-C", "/tmp/app"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/app")));
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        let result = Cli::try_parse_from(["clever-lint-migrate", "src/index.ts"]);
        assert!(result.is_err());
    }
}
