use indoc::formatdoc;
use zsnap_library::{size::to_human_byte_format, snapshot::QualifiedSnapshot};

use crate::library::plan::Plan;

/// The commands the operator runs by hand: the transfer itself, then
/// flushing and detaching the backup disk.
pub fn render_plan(plan: &Plan) -> String {
    let old = QualifiedSnapshot::new(&plan.data_dataset, &plan.old_label);
    let new = QualifiedSnapshot::new(&plan.data_dataset, &plan.new_label);

    formatdoc! {"
        - Pair for incremental backup
               {old_label} (old)
            => {new_label} (new)
        - Estimated transfer size: {human_size} ({bytes} bytes)
        - Execute the following command:
            zfs send -i {old} {new} | pv -pterb -s {bytes} | zfs receive -F {backup}

        - After the transfer run:
            zpool sync {pool}

        - Before removing the backup disk run:
            zpool export {pool}
            sync
            hdparm -y /dev/{device}
            echo 1 > /sys/block/{device}/device/delete
        ",
        old_label = plan.old_label,
        new_label = plan.new_label,
        human_size = to_human_byte_format(plan.transfer_size),
        bytes = plan.transfer_size,
        old = old,
        new = new,
        backup = plan.backup_dataset,
        pool = plan.backup_pool,
        device = plan.device,
    }
}
