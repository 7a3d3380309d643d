use crate::models::session::Session;
use crate::models::task_node::DailyForest;

/// Fold flat sessions into a per-day task forest.
///
/// Each session adds its duration to `total` of every node along its chain
/// and to `own` of the deepest node only. The day is the local start date.
pub fn aggregate(sessions: &[Session]) -> DailyForest {
    let mut forest = DailyForest::default();

    for session in sessions {
        let chain: Vec<&str> = session
            .titles
            .iter()
            .map(String::as_str)
            .take_while(|t| !t.is_empty())
            .collect();
        if chain.is_empty() {
            continue;
        }

        let duration = session.duration();
        let day = forest.day_mut(session.start.date_naive());

        let mut parent = None;
        for name in chain {
            let id = day.child(parent, name);
            day.node_mut(id).total += duration;
            parent = Some(id);
        }
        if let Some(leaf) = parent {
            day.node_mut(leaf).own += duration;
        }
    }

    forest
}
