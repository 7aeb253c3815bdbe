//! Folder hierarchy nodes.

use indexmap::IndexMap;
use serde::Serialize;

use crate::Entry;

/// A child of a folder: either a nested folder or a file leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A synthetic folder for one path segment
    Folder(FolderNode),

    /// A storage object
    File(Entry),
}

impl Node {
    /// The folder inside this node, if it is one.
    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }

    /// The entry inside this node, if it is a file.
    pub fn as_file(&self) -> Option<&Entry> {
        match self {
            Self::Folder(_) => None,
            Self::File(entry) => Some(entry),
        }
    }
}

/// A folder in the hierarchy.
///
/// The root has an empty name and path and a depth of `-1`, so its direct
/// children sit at depth 0. Children keep the order in which their key was
/// first inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderNode {
    /// Path segment this folder stands for (empty for the root)
    pub name: String,

    /// Accumulated path, each segment prefixed with `/` (e.g. `/a/b`)
    pub path: String,

    /// Root is -1, its child folders 0, and so on
    pub depth: i32,

    /// Children keyed by folder segment or file name
    pub children: IndexMap<String, Node>,
}

impl Default for FolderNode {
    fn default() -> Self {
        Self::root()
    }
}

impl FolderNode {
    /// Create an empty root folder.
    pub fn root() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            depth: -1,
            children: IndexMap::new(),
        }
    }

    /// Create an empty folder for `segment` nested directly under `parent`.
    pub fn child_of(parent: &FolderNode, segment: &str) -> Self {
        Self {
            name: segment.to_string(),
            path: format!("{}/{}", parent.path, segment),
            depth: parent.depth + 1,
            children: IndexMap::new(),
        }
    }

    /// Whether this is the synthetic root.
    pub fn is_root(&self) -> bool {
        self.depth < 0
    }

    /// Number of immediate children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether the folder has no children at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Immediate child folders in insertion order.
    pub fn folders(&self) -> impl Iterator<Item = &FolderNode> {
        self.children.values().filter_map(Node::as_folder)
    }

    /// Immediate file children in insertion order.
    pub fn files(&self) -> impl Iterator<Item = &Entry> {
        self.children.values().filter_map(Node::as_file)
    }

    /// Look up an immediate child by segment or file name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Walk down `/`-separated segments and return the folder found there.
    ///
    /// An empty path (or `/`) returns `self`.
    pub fn find_folder(&self, path: &str) -> Option<&FolderNode> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        if trimmed.is_empty() {
            return Some(self);
        }

        let mut folder = self;
        for segment in trimmed.split('/') {
            folder = folder.get(segment)?.as_folder()?;
        }
        Some(folder)
    }

    /// Number of files in this folder and all descendants.
    pub fn total_files(&self) -> usize {
        self.children
            .values()
            .map(|child| match child {
                Node::Folder(folder) => folder.total_files(),
                Node::File(_) => 1,
            })
            .sum()
    }

    /// Number of folders below this one (not counting itself).
    pub fn total_folders(&self) -> usize {
        self.folders().map(|folder| 1 + folder.total_folders()).sum()
    }

    /// Every file in the subtree, depth-first, with the folder segments
    /// that lead to it from this folder.
    pub fn leaves(&self) -> Vec<Leaf<'_>> {
        let mut leaves = Vec::new();
        collect_leaves(self, &mut Vec::new(), &mut leaves);
        leaves
    }
}

/// A file found by [`FolderNode::leaves`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<'a> {
    /// Folder segments from the starting folder down to the file's parent
    pub segments: Vec<&'a str>,

    /// The file itself
    pub entry: &'a Entry,
}

impl Leaf<'_> {
    /// Rebuild the key from the walked segments and the file name.
    pub fn rebuilt_key(&self) -> String {
        if self.segments.is_empty() {
            self.entry.name().to_string()
        } else {
            format!("{}/{}", self.segments.join("/"), self.entry.name())
        }
    }
}

fn collect_leaves<'a>(folder: &'a FolderNode, trail: &mut Vec<&'a str>, out: &mut Vec<Leaf<'a>>) {
    for child in folder.children.values() {
        match child {
            Node::Folder(sub) => {
                trail.push(&sub.name);
                collect_leaves(sub, trail, out);
                trail.pop();
            }
            Node::File(entry) => out.push(Leaf {
                segments: trail.clone(),
                entry,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn file(key: &str) -> Node {
        Node::File(Entry::new(key, Utc::now(), "", 1).unwrap())
    }

    fn sample_tree() -> FolderNode {
        let mut root = FolderNode::root();
        let mut a = FolderNode::child_of(&root, "a");
        let mut b = FolderNode::child_of(&a, "b");
        b.children.insert("c.png".to_string(), file("a/b/c.png"));
        a.children.insert("b".to_string(), Node::Folder(b));
        a.children.insert("d.png".to_string(), file("a/d.png"));
        root.children.insert("a".to_string(), Node::Folder(a));
        root.children.insert("top.txt".to_string(), file("top.txt"));
        root
    }

    #[test]
    fn test_root_defaults() {
        let root = FolderNode::root();

        assert!(root.is_root());
        assert!(root.is_empty());
        assert_eq!(root.name, "");
        assert_eq!(root.path, "");
        assert_eq!(root.depth, -1);
        assert_eq!(FolderNode::default(), root);
    }

    #[test]
    fn test_child_of_paths_and_depth() {
        let root = FolderNode::root();
        let a = FolderNode::child_of(&root, "a");
        let b = FolderNode::child_of(&a, "b");

        assert_eq!(a.path, "/a");
        assert_eq!(a.depth, 0);
        assert_eq!(b.path, "/a/b");
        assert_eq!(b.depth, 1);
        assert!(!b.is_root());
    }

    #[test]
    fn test_folders_and_files_split() {
        let tree = sample_tree();

        let folders: Vec<&str> = tree.folders().map(|f| f.name.as_str()).collect();
        let files: Vec<&str> = tree.files().map(Entry::name).collect();

        assert_eq!(folders, vec!["a"]);
        assert_eq!(files, vec!["top.txt"]);
        assert_eq!(tree.child_count(), 2);
    }

    #[test]
    fn test_find_folder() {
        let tree = sample_tree();

        assert_eq!(tree.find_folder("/a/b").map(|f| f.depth), Some(1));
        assert_eq!(tree.find_folder("a").map(|f| f.name.as_str()), Some("a"));
        assert!(tree.find_folder("").is_some_and(FolderNode::is_root));
        assert!(tree.find_folder("/missing").is_none());
        // A file is not a folder
        assert!(tree.find_folder("/top.txt").is_none());
    }

    #[test]
    fn test_totals() {
        let tree = sample_tree();

        assert_eq!(tree.total_files(), 3);
        assert_eq!(tree.total_folders(), 2);
    }

    #[test]
    fn test_leaves_rebuild_keys() {
        let tree = sample_tree();
        let keys: Vec<String> = tree.leaves().iter().map(Leaf::rebuilt_key).collect();

        assert_eq!(keys, vec!["a/b/c.png", "a/d.png", "top.txt"]);
        for leaf in tree.leaves() {
            assert_eq!(leaf.rebuilt_key(), leaf.entry.key());
        }
    }

    #[test]
    fn test_node_serialization_is_tagged() {
        let json = serde_json::to_value(file("x.png")).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["key"], "x.png");
    }
}
