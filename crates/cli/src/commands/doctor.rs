//! `warden doctor` — Diagnose verification-environment health.

use std::path::PathBuf;

pub fn run(checker: PathBuf, runtime: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 warden Doctor — Environment Diagnostics");
    println!("==========================================\n");

    let mut issues = 0;

    // Check the static-checker binary
    if checker.is_file() {
        println!("  ✅ Checker binary found: {}", checker.display());
    } else {
        println!("  ❌ Checker binary not found: {}", checker.display());
        issues += 1;
    }

    // Check the interpreter/runtime the symbol universe comes from
    if runtime.exists() {
        println!("  ✅ Runtime found: {}", runtime.display());
    } else {
        println!("  ❌ Runtime not found: {}", runtime.display());
        issues += 1;
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. Verification runs will fail until fixed.");
        std::process::exit(2);
    }

    Ok(())
}
