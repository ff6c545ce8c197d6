use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod cli;

fn main() {
    if let Err(error) = run() {
        eprintln!("pbtypegen error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level())?;

    tracing::info!("Reading schema from {}", cli.json.display());
    let source = pbtypegen::codegen::generate_from_file(&cli.json)
        .with_context(|| format!("failed to generate types from {}", cli.json.display()))?;

    if cli.stdout {
        println!("{source}");
        return Ok(());
    }

    write_output(&cli.out, &source)?;
    tracing::info!("Wrote {} bytes to {}", source.len(), cli.out.display());
    Ok(())
}

fn write_output(path: &Path, source: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, source).with_context(|| format!("failed to write {}", path.display()))
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PBTYPEGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_output;

    #[test]
    fn write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("src").join("types").join("pocketbase-types.ts");

        write_output(&path, "export {}").expect("write should succeed");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read back"),
            "export {}"
        );
    }
}
