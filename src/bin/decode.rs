use anyhow::Result;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "decode")]
#[command(about = "Decode a base-N share value to decimal", long_about = None)]
struct Args {
    /// Digits to decode (case-insensitive)
    value: String,

    /// Base of the digits, 2 to 36
    #[arg(short, long, default_value_t = 10)]
    base: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("decode=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let value = shamir_recover::decode(&args.value, args.base)?;
    debug!(base = args.base, bits = value.bits(), "decoded");
    println!("{}", value);

    Ok(())
}
