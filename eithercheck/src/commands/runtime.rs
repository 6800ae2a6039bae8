// eithercheck/src/commands/runtime.rs

use eithercheck_core::infrastructure::compiler::CLIENT_RUNTIME;

pub fn execute() -> anyhow::Result<()> {
    print!("{}", CLIENT_RUNTIME);
    Ok(())
}
