//! Environment overrides live in their own test binary so they cannot leak
//! into the other configuration tests.

use portfolio::Config;
use temp_dir::TempDir;

#[test]
fn test_env_overrides_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("portfolio.toml");
    std::fs::write(&path, "[intake]\ntimeout_secs = 5\n")?;

    // SAFETY: only test in this binary, nothing else reads the environment
    unsafe {
        std::env::set_var("PORTFOLIO__INTAKE__TIMEOUT_SECS", "12");
        std::env::set_var("PORTFOLIO__LOGGING__LEVEL", "debug");
    }

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.intake.timeout_secs, 12);
    assert_eq!(config.logging.level, "debug");

    Ok(())
}
