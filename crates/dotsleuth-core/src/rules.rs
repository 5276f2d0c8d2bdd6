/// Static classification rules — which dotfiles are safe to place under
/// dotfile management and which must never be.
///
/// Both lists are fixed at build time and never mutated. The exclude set
/// mixes exact names with prefix-wildcard patterns (a single trailing `*`);
/// matching is case-sensitive throughout, and exclusion always wins over
/// the safe list.
use crate::model::Category;

/// Entries that should never be managed: caches, shell histories,
/// credential stores, and machine-local state.
///
/// Entries ending in `*` are prefix-wildcard patterns; everything else
/// matches exactly.
pub const EXCLUDE: &[&str] = &[
    ".DS_Store",
    ".Trash",
    ".cache",
    ".dropbox",
    ".local",
    ".ssh", // keys
    ".zcompdump",
    ".zcompdump-*",
    ".zsh_history",
    ".bash_history",
    ".python_history",
    ".viminfo",
    ".lesshst",
    ".wget-hsts",
    ".CFUserTextEncoding",
    ".zsh_sessions",
    ".bash_sessions",
    ".vim-bookmarks",
    ".cookiecutter_replay",
    ".cpanm",
    ".cups",
    ".docker",
    ".npm",
    ".nextflow",
    ".mamba",
    ".conda",
    ".ipython",
    ".matplotlib",
    ".pymol",
    ".task", // taskwarrior data directory
    ".cursor",
    ".cursor-tutor",
    ".yarn",
    ".yarnrc",
    ".node_repl_history",
    ".npmrc",  // may contain tokens
    ".pypirc", // may contain credentials
    ".netrc",  // credentials
    ".aws",    // credentials
    ".password-store",
    ".gnupg", // keys
];

/// Dotfiles that are typically safe to manage. Exact names only —
/// no wildcard patterns on this list.
pub const SAFE_TO_MANAGE: &[&str] = &[
    ".zshrc",
    ".bashrc",
    ".bash_profile",
    ".gitconfig",
    ".gitignore_global",
    ".vimrc",
    ".vim",
    ".tmux.conf",
    ".taskrc",
    ".condarc",
    ".pymolrc",
    ".config",
    ".oh-my-zsh",
    ".zsh",
    ".jupyter",
    ".zprofile",
    ".zshenv",
    ".zlogin",
    ".gitattributes",
    ".nvim",
    ".editorconfig",
    ".prettierrc",
    ".prettierrc.json",
    ".eslintrc",
    ".eslintrc.json",
    ".flake8",
    ".pylintrc",
    ".mypy.ini",
    ".pythonrc",
    ".inputrc",
    ".screenrc",
    ".ackrc",
    ".agignore",
    ".rgignore",
    ".ripgreprc",
    ".curlrc",
    ".wgetrc",
    ".gemrc",
    ".irbrc",
    ".pryrc",
    ".railsrc",
    ".rspec",
    ".rubocop.yml",
    ".tmuxinator",
    ".dockerignore",
];

/// Check a name against an exclude set: exact membership first, then an
/// ordered scan of the wildcard patterns comparing literal prefixes.
/// No regex — a pattern is a literal prefix plus one trailing `*`.
fn matches_exclude(name: &str, exclude: &[&str]) -> bool {
    if exclude.contains(&name) {
        return true;
    }
    exclude
        .iter()
        .filter_map(|pattern| pattern.strip_suffix('*'))
        .any(|prefix| name.starts_with(prefix))
}

/// Classify against explicit rule sets. Exclusion is checked first and
/// short-circuits, so a name matching both a wildcard exclude pattern and
/// the safe list stays excluded.
fn classify_against(name: &str, exclude: &[&str], safe: &[&str]) -> Category {
    if matches_exclude(name, exclude) {
        Category::Excluded
    } else if safe.contains(&name) {
        Category::Safe
    } else {
        Category::Unknown
    }
}

/// Check whether a candidate name falls in the built-in exclude set.
pub fn is_excluded(name: &str) -> bool {
    matches_exclude(name, EXCLUDE)
}

/// Classify a candidate name into exactly one category using the built-in
/// rule sets.
pub fn classify(name: &str) -> Category {
    classify_against(name, EXCLUDE, SAFE_TO_MANAGE)
}
