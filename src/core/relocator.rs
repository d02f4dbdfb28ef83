use crate::adapters::LocalFs;
use crate::core::{FileMover, RelocationPlan, Result};
use std::path::Path;

pub struct Relocator<M: FileMover> {
    mover: M,
}

impl<M: FileMover> Relocator<M> {
    pub fn new(mover: M) -> Self {
        Self { mover }
    }

    /// Moves every `source_dir/name` to `destination_dir/name`, in list order.
    ///
    /// The destination directory is created first, even when the list is empty
    /// or the first move fails. The first failing move aborts the run; entries
    /// moved before it stay where they were moved to.
    pub fn relocate<S: AsRef<str>>(
        &self,
        file_names: &[S],
        source_dir: &Path,
        destination_dir: &Path,
    ) -> Result<()> {
        let plan = RelocationPlan::new(file_names, source_dir, destination_dir);
        self.execute(&plan)
    }

    pub fn execute(&self, plan: &RelocationPlan) -> Result<()> {
        tracing::debug!("Ensuring destination {}", plan.destination_dir.display());
        self.mover.ensure_dir(&plan.destination_dir)?;

        for (index, file_move) in plan.moves.iter().enumerate() {
            tracing::debug!(
                "[{}/{}] {} -> {}",
                index + 1,
                plan.len(),
                file_move.source.display(),
                file_move.destination.display()
            );
            self.mover
                .move_file(&file_move.source, &file_move.destination)
                .inspect_err(|e| tracing::error!("Stopped at '{}': {}", file_move.name, e))?;
        }

        tracing::info!(
            "Moved {} entries into {}",
            plan.len(),
            plan.destination_dir.display()
        );
        Ok(())
    }
}

impl Default for Relocator<LocalFs> {
    fn default() -> Self {
        Self::new(LocalFs::new())
    }
}

/// Relocates on the local filesystem.
pub fn relocate<S: AsRef<str>>(
    file_names: &[S],
    source_dir: &Path,
    destination_dir: &Path,
) -> Result<()> {
    Relocator::<LocalFs>::default().relocate(file_names, source_dir, destination_dir)
}
