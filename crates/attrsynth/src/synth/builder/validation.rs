use crate::synth::error::ConfigIssue;

/// The configuration facts that decide whether finalization would drop or dangle something.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct ConfigSnapshot {
  pub has_field: bool,
  pub readable: bool,
  pub writable: bool,
  pub custom_read: bool,
  pub custom_write: bool,
  pub has_initial_value: bool,
  /// A derived static setter whose parameter hides the field, with no class to qualify it by.
  pub unqualified_static_write: bool,
}

pub(crate) fn find_issues(config: ConfigSnapshot) -> Vec<ConfigIssue> {
  let mut issues = vec![];

  if config.custom_read && !config.readable {
    issues.push(ConfigIssue::DiscardedReadBody);
  }

  if config.custom_write && !config.writable {
    issues.push(ConfigIssue::DiscardedWriteBody);
  }

  // With a custom getter there is no storage left for the derived setter to target. A bare
  // `skip_field` without one means the storage is declared by the enclosing class.
  if config.writable && !config.custom_write && config.custom_read && !config.has_field {
    issues.push(ConfigIssue::UnbackedWrite);
  }

  if config.has_initial_value && !config.has_field {
    issues.push(ConfigIssue::DiscardedInitialValue);
  }

  if config.writable && config.unqualified_static_write {
    issues.push(ConfigIssue::ShadowedStaticWrite);
  }

  issues
}
