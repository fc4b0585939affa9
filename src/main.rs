use log::error;
use plagiarism_checker::{
    check_plagiarism_with_custom_config, format_score, CheckerArgs,
    DEFAULT_PLAGIARISM_CHECKER_CONFIG,
};

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = match CheckerArgs::from_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let config = DEFAULT_PLAGIARISM_CHECKER_CONFIG;

    match check_plagiarism_with_custom_config(
        config,
        &args.original_path,
        &args.plagiarized_path,
        &args.answer_path,
    ) {
        Ok(similarity) => {
            if config.echo_result {
                println!(
                    "Similarity: {}",
                    format_score(similarity, config.result_precision)
                );
            }
        }
        Err(e) => {
            error!("Error checking documents: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
