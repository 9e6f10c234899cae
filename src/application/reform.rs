use crate::domain::property::Reformable;
use tracing::debug;

pub struct ReformPlanner;

impl ReformPlanner {
    /// Marks every property as reformed and returns how many changed state.
    pub fn complete(properties: &mut [&mut dyn Reformable]) -> usize {
        let mut changed = 0;
        for property in properties.iter_mut() {
            if !property.is_reformed() {
                property.mark_as_reformed();
                changed += 1;
            }
        }
        debug!(changed, "reforms completed");
        changed
    }
}
