use crate::report::{run_recommend, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use food_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Food Insights",
    about = "Score food diary entries and serve taste recommendations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print cuisine, dish and tip recommendations for a diary export
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_insights::insights::RatingScale;

    #[test]
    fn serve_is_optional_and_recommend_parses_flags() {
        let cli = Cli::try_parse_from(["food-insights"]).expect("bare invocation parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from([
            "food-insights",
            "recommend",
            "--entries-csv",
            "diary.csv",
            "--rating-scale",
            "ten",
            "--json",
        ])
        .expect("recommend parses");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.rating_scale, Some(RatingScale::Ten));
                assert!(args.json);
                assert!(args.entries_csv.is_some());
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }
}
