use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resumatch")]
#[command(version)]
#[command(about = "Rank resumes against a job description")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest resumes and rank them against a job description
    Rank {
        /// File holding the job description
        #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Resume files or directories (.txt, .pdf, .docx)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// JSON config with scoring weights and extra skills
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show only the best N candidates
        #[arg(short, long)]
        top: Option<usize>,

        /// Print results and summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the features extracted from one document
    Inspect {
        file: PathBuf,

        /// JSON config with extra skills
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration
    Config,

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["resumatch", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_rank() {
        let cli = Cli::try_parse_from([
            "resumatch", "rank", "--job", "jd.txt", "a.pdf", "resumes/", "--top", "5", "--json",
        ]);
        assert!(cli.is_ok());
        if let Commands::Rank {
            job,
            job_text,
            paths,
            top,
            json,
            config,
        } = cli.unwrap().command
        {
            assert_eq!(job, Some(PathBuf::from("jd.txt")));
            assert!(job_text.is_none());
            assert_eq!(paths, vec![PathBuf::from("a.pdf"), PathBuf::from("resumes/")]);
            assert_eq!(top, Some(5));
            assert!(json);
            assert!(config.is_none());
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_cli_rank_requires_job() {
        let cli = Cli::try_parse_from(["resumatch", "rank", "a.pdf"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_rank_job_sources_conflict() {
        let cli = Cli::try_parse_from([
            "resumatch", "rank", "--job", "jd.txt", "--job-text", "rust", "a.pdf",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_rank_inline_job() {
        let cli = Cli::try_parse_from(["resumatch", "rank", "--job-text", "rust", "a.pdf"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::try_parse_from(["resumatch", "inspect", "cv.docx"]);
        assert!(cli.is_ok());
        if let Commands::Inspect { file, config } = cli.unwrap().command {
            assert_eq!(file, PathBuf::from("cv.docx"));
            assert!(config.is_none());
        } else {
            panic!("Expected Inspect command");
        }
    }
}
