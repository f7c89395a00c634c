//! Built-in console commands.

use devcon_types::error::{ConsoleError, Result};

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(HelpCmd))?;
    reg.register(Box::new(ClearCmd))?;
    reg.register(Box::new(EchoCmd))?;
    reg.register(Box::new(TestCmd))?;
    Ok(())
}

/// A registry holding only the built-in commands.
pub fn builtin_registry() -> Result<CommandRegistry> {
    let mut reg = CommandRegistry::new();
    register_builtins(&mut reg)?;
    Ok(reg)
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(&self, args: &[String], env: &mut Environment<'_>) -> Result<()> {
        if let Some(name) = args.get(1) {
            let cmd = env
                .registry
                .resolve(name)
                .ok_or_else(|| ConsoleError::Command(format!("unknown command: {name}")))?;
            env.out.println(cmd.name());
            env.out.println(&format!("  {}", cmd.description()));
            env.out.println(&format!("  Usage: {}", cmd.usage()));
            return Ok(());
        }

        let cmds = env.registry.list_commands();
        env.out.println(&format!("Commands ({}):", cmds.len()));
        for (name, desc) in &cmds {
            env.out.println(&format!("  {name:12} {desc}"));
        }
        env.out.println("Type 'help <command>' for details.");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear console output"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[String], env: &mut Environment<'_>) -> Result<()> {
        env.out.clear();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text]"
    }
    fn execute(&self, args: &[String], env: &mut Environment<'_>) -> Result<()> {
        // Only the first argument is printed; quote text containing spaces.
        env.out.println(args.get(1).map_or("", String::as_str));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// test
// ---------------------------------------------------------------------------

struct TestCmd;
impl Command for TestCmd {
    fn name(&self) -> &str {
        "test"
    }
    fn description(&self) -> &str {
        "Write a line to the application log"
    }
    fn usage(&self) -> &str {
        "test"
    }
    fn execute(&self, _args: &[String], _env: &mut Environment<'_>) -> Result<()> {
        log::info!("Test command executed.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{OutputSink, TextBuffer};

    fn run(reg: &CommandRegistry, out: &mut TextBuffer, line: &[&str]) -> Result<()> {
        let args: Vec<String> = line.iter().map(|s| s.to_string()).collect();
        let cmd = reg.resolve(&args[0]).unwrap();
        let mut env = Environment { out, registry: reg };
        cmd.execute(&args, &mut env)
    }

    #[test]
    fn builtins_registered() {
        let reg = builtin_registry().unwrap();
        for name in ["help", "clear", "echo", "test"] {
            assert!(reg.contains(name), "missing {name}");
        }
        assert_eq!(reg.len(), 4);
    }

    #[test]
    fn builtins_twice_is_duplicate() {
        let mut reg = builtin_registry().unwrap();
        let err = register_builtins(&mut reg).unwrap_err();
        assert!(matches!(err, ConsoleError::DuplicateKeyword(_)));
    }

    #[test]
    fn echo_prints_argument() {
        let reg = builtin_registry().unwrap();
        let mut out = TextBuffer::new();
        run(&reg, &mut out, &["echo", "hi"]).unwrap();
        assert_eq!(out.text(), "hi\n");
    }

    #[test]
    fn echo_without_argument_prints_newline() {
        let reg = builtin_registry().unwrap();
        let mut out = TextBuffer::new();
        run(&reg, &mut out, &["echo"]).unwrap();
        assert_eq!(out.text(), "\n");
    }

    #[test]
    fn echo_ignores_extra_arguments() {
        let reg = builtin_registry().unwrap();
        let mut out = TextBuffer::new();
        run(&reg, &mut out, &["echo", "one", "two"]).unwrap();
        assert_eq!(out.text(), "one\n");
    }

    #[test]
    fn clear_empties_output() {
        let reg = builtin_registry().unwrap();
        let mut out = TextBuffer::new();
        out.println("old output");
        run(&reg, &mut out, &["clear", "extra", "args"]).unwrap();
        assert!(out.is_empty());
        run(&reg, &mut out, &["clear"]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_command_prints_nothing() {
        let reg = builtin_registry().unwrap();
        let mut out = TextBuffer::new();
        run(&reg, &mut out, &["test"]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn help_lists_sorted_commands() {
        let reg = builtin_registry().unwrap();
        let mut out = TextBuffer::new();
        run(&reg, &mut out, &["help"]).unwrap();
        let lines = out.lines();
        assert_eq!(lines[0], "Commands (4):");
        assert!(lines[1].trim_start().starts_with("clear"));
        assert!(lines[2].trim_start().starts_with("echo"));
        assert!(lines[3].trim_start().starts_with("help"));
        assert!(lines[4].trim_start().starts_with("test"));
    }

    #[test]
    fn help_for_single_command() {
        let reg = builtin_registry().unwrap();
        let mut out = TextBuffer::new();
        run(&reg, &mut out, &["help", "echo"]).unwrap();
        assert!(out.text().contains("Usage: echo [text]"));
    }

    #[test]
    fn help_for_unknown_command_errors() {
        let reg = builtin_registry().unwrap();
        let mut out = TextBuffer::new();
        let err = run(&reg, &mut out, &["help", "nope"]).unwrap_err();
        assert_eq!(format!("{err}"), "unknown command: nope");
    }
}
