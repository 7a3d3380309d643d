use chrono::{NaiveDate, TimeDelta};
use std::collections::BTreeMap;

/// Index of a node inside its `DayTree` arena.
pub type NodeId = usize;

/// One task at one hierarchy level for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNode {
    pub name: String,
    /// Time of sessions whose chain ends exactly here.
    pub own: TimeDelta,
    /// `own` plus the `total` of every child.
    pub total: TimeDelta,
    pub children: BTreeMap<String, NodeId>,
}

impl TaskNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            own: TimeDelta::zero(),
            total: TimeDelta::zero(),
            children: BTreeMap::new(),
        }
    }
}

/// Task forest of a single day, stored as an arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayTree {
    nodes: Vec<TaskNode>,
    roots: BTreeMap<String, NodeId>,
}

impl DayTree {
    /// Get-or-create `name` under `parent` (`None` = root level).
    pub fn child(&mut self, parent: Option<NodeId>, name: &str) -> NodeId {
        let existing = match parent {
            None => self.roots.get(name),
            Some(p) => self.nodes[p].children.get(name),
        };
        if let Some(&id) = existing {
            return id;
        }

        let id = self.nodes.len();
        self.nodes.push(TaskNode::new(name));
        match parent {
            None => self.roots.insert(name.to_string(), id),
            Some(p) => self.nodes[p].children.insert(name.to_string(), id),
        };
        id
    }

    pub fn node(&self, id: NodeId) -> &TaskNode {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TaskNode {
        &mut self.nodes[id]
    }

    /// Root nodes in lexicographic order.
    pub fn roots(&self) -> impl Iterator<Item = &TaskNode> {
        self.roots.values().map(|&id| &self.nodes[id])
    }

    /// Children of `node` in lexicographic order.
    pub fn children<'a>(&'a self, node: &'a TaskNode) -> impl Iterator<Item = &'a TaskNode> {
        node.children.values().map(|&id| &self.nodes[id])
    }

    /// Follow a title path from the roots.
    pub fn find(&self, path: &[&str]) -> Option<&TaskNode> {
        let (first, rest) = path.split_first()?;
        let mut id = *self.roots.get(*first)?;
        for name in rest {
            id = *self.nodes[id].children.get(*name)?;
        }
        Some(&self.nodes[id])
    }

    pub fn day_total(&self) -> TimeDelta {
        self.roots()
            .fold(TimeDelta::zero(), |acc, root| acc + root.total)
    }
}

/// Calendar date → task forest of that day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyForest {
    pub days: BTreeMap<NaiveDate, DayTree>,
}

impl DailyForest {
    pub fn day(&self, date: NaiveDate) -> Option<&DayTree> {
        self.days.get(&date)
    }

    pub fn day_mut(&mut self, date: NaiveDate) -> &mut DayTree {
        self.days.entry(date).or_default()
    }

    /// Keep only the days listed in `dates`.
    pub fn retain_dates(&mut self, dates: &[NaiveDate]) {
        self.days.retain(|d, _| dates.contains(d));
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
