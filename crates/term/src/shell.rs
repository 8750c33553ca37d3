//! Shell integration printed by `hcd init`.

use clap::ValueEnum;

/// Shells with a wrapper function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
	Bash,
	Zsh,
	Fish,
}

const POSIX_WRAPPER: &str = r#"hcd() {
    case "$1" in
        init|query|help|-h|--help|-V|--version)
            command hcd "$@"
            return
            ;;
    esac
    local dir
    dir="$(command hcd "$@")" || return
    [ -n "$dir" ] && builtin cd -- "$dir"
}
"#;

const FISH_WRAPPER: &str = r#"function hcd
    switch "$argv[1]"
        case init query help -h --help -V --version
            command hcd $argv
            return
    end
    set -l dir (command hcd $argv); or return
    test -n "$dir"; and builtin cd -- $dir
end
"#;

/// Returns a function definition that runs hcd and enters the directory it prints.
pub fn init_script(shell: Shell) -> &'static str {
	match shell {
		Shell::Bash | Shell::Zsh => POSIX_WRAPPER,
		Shell::Fish => FISH_WRAPPER,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_wrapper_changes_directory_and_passes_subcommands_through() {
		for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
			let script = init_script(shell);
			assert!(script.contains("builtin cd -- "), "{shell:?}");
			assert!(script.contains("command hcd"), "{shell:?}");
			assert!(script.contains("init"), "{shell:?}");
		}
	}

	#[test]
	fn fish_uses_fish_syntax() {
		assert!(init_script(Shell::Fish).starts_with("function hcd"));
		assert!(init_script(Shell::Bash).starts_with("hcd() {"));
	}
}
