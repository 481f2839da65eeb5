//! `warden check` — run the static half of the pipeline on a source file.

use std::path::PathBuf;
use std::time::Duration;
use warden_checker::CheckRunner;
use warden_verify::Verifier;

pub async fn run(
    file: PathBuf,
    checker: PathBuf,
    runtime: PathBuf,
    timeout_secs: u64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let runner =
        CheckRunner::new(checker, runtime).with_timeout(Duration::from_secs(timeout_secs));
    let verifier = Verifier::new(runner);

    let result = match verifier.check_source(&file).await {
        Ok(result) => result,
        Err(e) => {
            // Infrastructure fault: the environment needs fixing, not the
            // candidate. Distinct exit code so regeneration loops can tell.
            eprintln!("verification of {} aborted: {e}", file.display());
            std::process::exit(2);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for message in &result.blocking_messages {
            println!("  ❌ {message}");
        }
        for message in &result.advisory_messages {
            println!("  ⚠️  {message}");
        }
        if result.static_pass {
            println!("PASS: no blocking findings in {}", file.display());
        } else {
            println!(
                "FAIL: {} blocking finding(s) in {}",
                result.blocking_messages.len(),
                file.display()
            );
        }
    }

    if !result.static_pass {
        std::process::exit(1);
    }
    Ok(())
}
