//! Package definitions bundled into the binary

/// `(id, yaml)` pairs for every file under `packages/`
pub(super) const BUILTIN_DEFINITIONS: &[(&str, &str)] = &[
    ("codelimit", include_str!("../../packages/codelimit.yml")),
    ("hadolint", include_str!("../../packages/hadolint.yml")),
    ("pylint", include_str!("../../packages/pylint.yml")),
    ("ruff", include_str!("../../packages/ruff.yml")),
    ("yamllint", include_str!("../../packages/yamllint.yml")),
];
