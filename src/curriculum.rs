use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleInfo {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MODULES: [ModuleInfo; 6] = [
    ModuleInfo {
        id: 1,
        title: "What is Machine Learning?",
        description: "Understand the basics of ML and how it differs from traditional programming",
    },
    ModuleInfo {
        id: 2,
        title: "Data Playground",
        description: "Explore, clean, and transform data interactively",
    },
    ModuleInfo {
        id: 3,
        title: "Training Simulator",
        description: "Train your first ML model and watch it learn",
    },
    ModuleInfo {
        id: 4,
        title: "Neural Networks",
        description: "Build and visualize neural network architectures",
    },
    ModuleInfo {
        id: 5,
        title: "Classification Demo",
        description: "Create decision boundaries for classification",
    },
    ModuleInfo {
        id: 6,
        title: "Real-World Apps",
        description: "See ML in action with practical examples",
    },
];

pub fn module(id: u8) -> Option<&'static ModuleInfo> {
    MODULES.iter().find(|m| m.id == id)
}

/// Modules completed so far, in completion order.
#[derive(Clone, Debug, Default)]
pub struct Progress {
    completed: Vec<u8>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time a known module is completed.
    pub fn complete(&mut self, id: u8) -> bool {
        if module(id).is_none() || self.is_completed(id) {
            return false;
        }
        self.completed.push(id);
        info!("module {id} completed ({})", self.label());
        true
    }

    pub fn is_completed(&self, id: u8) -> bool {
        self.completed.contains(&id)
    }

    pub fn completed(&self) -> &[u8] {
        &self.completed
    }

    pub fn percent(&self) -> f64 {
        self.completed.len() as f64 / MODULES.len() as f64 * 100.0
    }

    pub fn label(&self) -> String {
        format!("{} of {}", self.completed.len(), MODULES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_is_idempotent() {
        let mut progress = Progress::new();
        assert!(progress.complete(3));
        assert!(!progress.complete(3));
        assert_eq!(progress.completed(), &[3]);
        assert_eq!(progress.label(), "1 of 6");
    }

    #[test]
    fn test_unknown_module_ignored() {
        let mut progress = Progress::new();
        assert!(!progress.complete(0));
        assert!(!progress.complete(7));
        assert_eq!(progress.percent(), 0.0);
    }

    #[test]
    fn test_percent() {
        let mut progress = Progress::new();
        for id in [1, 2, 5] {
            progress.complete(id);
        }
        assert!((progress.percent() - 50.0).abs() < 1e-10);

        for m in &MODULES {
            progress.complete(m.id);
        }
        assert_eq!(progress.percent(), 100.0);
        assert_eq!(module(4).unwrap().title, "Neural Networks");
    }
}
