use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = docdir_api::Args::parse();

	docdir_api::run(args).await
}
