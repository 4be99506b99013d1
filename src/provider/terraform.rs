// Terraform workspaces via the terraform CLI.
// ref: terraform workspace — https://developer.hashicorp.com/terraform/cli/commands/workspace

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::debug;

use super::Provider;
use crate::error::ProviderError;
use crate::model::workspace::{parse_workspace_list, Item};

pub struct TerraformProvider {
    program: String,
    chdir: Option<PathBuf>,
}

impl TerraformProvider {
    pub fn new(program: impl Into<String>, chdir: Option<PathBuf>) -> Self {
        Self { program: program.into(), chdir }
    }

    /// `<program> [-chdir=DIR] workspace <args..>`
    fn workspace_cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(dir) = &self.chdir {
            let mut flag = OsString::from("-chdir=");
            flag.push(dir);
            cmd.arg(flag);
        }
        cmd.arg("workspace").args(args);
        cmd
    }

    fn run(&self, args: &[&str]) -> Result<Output, ProviderError> {
        debug!(program = %self.program, ?args, "running workspace command");
        self.workspace_cmd(args)
            .output()
            .map_err(|source| ProviderError::Spawn { program: self.program.clone(), source })
    }

    /// Run a mutating command, forwarding everything it prints into `out`.
    fn run_captured(
        &self,
        action: &'static str,
        name: &str,
        out: &mut dyn Write,
    ) -> Result<(), ProviderError> {
        let output = self.run(&[action, name])?;
        out.write_all(&output.stdout)?;
        out.write_all(&output.stderr)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(ProviderError::CommandFailed {
                action,
                name: name.to_string(),
                message: failure_message(&output),
            })
        }
    }
}

fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let msg = if !stderr.trim().is_empty() { stderr } else { stdout };
    msg.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| output.status.to_string())
}

impl Provider for TerraformProvider {
    fn list(&mut self) -> Result<Vec<Item>, ProviderError> {
        let output = self.run(&["list"])?;
        if !output.status.success() {
            return Err(ProviderError::ListFailed(failure_message(&output)));
        }
        Ok(parse_workspace_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn select(&mut self, name: &str, out: &mut dyn Write) -> Result<(), ProviderError> {
        self.run_captured("select", name, out)
    }

    fn delete(&mut self, name: &str, out: &mut dyn Write) -> Result<Vec<Item>, ProviderError> {
        self.run_captured("delete", name, out)?;
        self.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chdir_flag_precedes_workspace_subcommand() {
        let provider = TerraformProvider::new("terraform", Some(PathBuf::from("infra/live")));
        let cmd = provider.workspace_cmd(&["select", "dev"]);
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["-chdir=infra/live", "workspace", "select", "dev"]);
    }

    #[test]
    fn plain_command_without_chdir() {
        let provider = TerraformProvider::new("tofu", None);
        let cmd = provider.workspace_cmd(&["list"]);
        assert_eq!(cmd.get_program(), "tofu");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["workspace", "list"]);
    }

    // A stand-in terraform binary keeps its workspace list in a `state` file next to it.
    #[cfg(unix)]
    const FAKE_TERRAFORM: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
case "$1" in -chdir=*) echo "$1" > "$dir/chdir"; shift ;; esac
case "$2" in
  list) cat "$dir/state" ;;
  select)
    if [ "$3" = "missing" ]; then echo "Workspace \"$3\" doesn't exist." >&2; exit 1; fi
    echo "Switched to workspace \"$3\"." ;;
  delete)
    if [ "$3" = "locked" ]; then echo "Error acquiring the state lock" >&2; exit 1; fi
    grep -v " $3\$" "$dir/state" > "$dir/state.tmp"; mv "$dir/state.tmp" "$dir/state"
    echo "Deleted workspace \"$3\"!" ;;
esac
"#;

    // Kept in one test: writing and exec'ing scripts from parallel tests races on ETXTBSY.
    #[cfg(unix)]
    #[test]
    fn drives_fake_terraform_cli() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("terraform");
        std::fs::write(&script, FAKE_TERRAFORM).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(dir.path().join("state"), "  default\n* staging\n  locked\n  dev\n\n").unwrap();

        let program = script.to_string_lossy().into_owned();
        let mut provider = TerraformProvider::new(program, Some(PathBuf::from("stacks/app")));

        let items = provider.list().unwrap();
        assert_eq!(
            items,
            vec![
                Item::new("default", false),
                Item::new("staging", true),
                Item::new("locked", false),
                Item::new("dev", false),
            ]
        );
        let chdir = std::fs::read_to_string(dir.path().join("chdir")).unwrap();
        assert_eq!(chdir.trim(), "-chdir=stacks/app");

        let mut out = Vec::new();
        provider.select("dev", &mut out).unwrap();
        assert_eq!(String::from_utf8_lossy(&out), "Switched to workspace \"dev\".\n");

        let mut out = Vec::new();
        let err = provider.select("missing", &mut out).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to select workspace missing: Workspace \"missing\" doesn't exist."
        );
        assert!(String::from_utf8_lossy(&out).contains("doesn't exist"));

        let mut out = Vec::new();
        let items = provider.delete("dev", &mut out).unwrap();
        assert_eq!(String::from_utf8_lossy(&out), "Deleted workspace \"dev\"!\n");
        assert!(items.iter().all(|i| i.name != "dev"));
        assert_eq!(items.len(), 3);

        let mut out = Vec::new();
        let err = provider.delete("locked", &mut out).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::CommandFailed { action: "delete", ref name, .. } if name == "locked"
        ));

        let mut missing = TerraformProvider::new(dir.path().join("nope").to_string_lossy(), None);
        assert!(matches!(missing.list(), Err(ProviderError::Spawn { .. })));
    }
}
