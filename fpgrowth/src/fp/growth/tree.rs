use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Prefix paths for one item: every occurrence's path from the root (exclusive)
/// down to the node's parent, paired with the occurrence's count.
pub type PatternBase<I> = Vec<(Vec<I>, usize)>;

#[derive(Debug, Clone)]
pub struct FPNode<I> {
    pub item: Option<I>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<I, usize>,
    /// Next node holding the same item, in creation order.
    pub neighbor: Option<usize>,
}

/// Head and tail of an item's same-item chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub head: usize,
    pub tail: usize,
}

#[derive(Debug, Clone)]
pub struct FPTree<I> {
    pub nodes: Vec<FPNode<I>>,
    pub header_table: HashMap<I, HeaderEntry>,
    pub root_index: usize,
    /// Items in the order their first node was created.
    first_seen: Vec<I>,
}

impl<I> FPNode<I> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            neighbor: None,
        }
    }

    pub fn new_item(item: I, count: usize, parent: Option<usize>) -> Self {
        Self {
            item: Some(item),
            count,
            parent,
            children: HashMap::new(),
            neighbor: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<I: Eq + Hash + Clone> Default for FPTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Eq + Hash + Clone> FPTree<I> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
            first_seen: Vec::new(),
        }
    }

    /// True when nothing has been inserted below the root.
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].is_leaf()
    }

    /// Number of item nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Inserts an already normalized transaction, adding `count` to every
    /// node along its path.
    pub fn insert_transaction(&mut self, transaction: &[I], count: usize) {
        let mut current_index = self.root_index;

        for item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += count;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item.clone(), count, Some(current_index)));
                self.nodes[current_index]
                    .children
                    .insert(item.clone(), new_index);
                self.link_node(item, new_index);
                current_index = new_index;
            }
        }
    }

    fn link_node(&mut self, item: &I, index: usize) {
        match self.header_table.get_mut(item) {
            Some(entry) => {
                self.nodes[entry.tail].neighbor = Some(index);
                entry.tail = index;
            }
            None => {
                self.header_table.insert(
                    item.clone(),
                    HeaderEntry {
                        head: index,
                        tail: index,
                    },
                );
                self.first_seen.push(item.clone());
            }
        }
    }

    /// Walks the same-item chain for `item`.
    pub fn item_nodes(&self, item: &I) -> SameItemNodes<'_, I> {
        SameItemNodes {
            tree: self,
            next: self.header_table.get(item).map(|entry| entry.head),
        }
    }

    pub fn item_support(&self, item: &I) -> usize {
        self.item_nodes(item).map(|node| node.count).sum()
    }

    /// Items present in the tree by descending support; ties keep the order in
    /// which the items first entered the tree.
    pub fn items_by_support(&self) -> Vec<I> {
        let mut ranked: Vec<(usize, &I)> = self
            .first_seen
            .iter()
            .map(|item| (self.item_support(item), item))
            .collect();
        // Stable sort so equal supports stay in first-seen order.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.into_iter().map(|(_, item)| item.clone()).collect()
    }

    /// Conditional pattern base of `item`. Occurrences directly under the root
    /// yield an empty prefix.
    pub fn prefix_paths(&self, item: &I) -> PatternBase<I> {
        self.item_nodes(item)
            .map(|node| {
                let mut path: Vec<I> = self
                    .ancestors(node)
                    .take_while(|ancestor| !ancestor.is_root())
                    .filter_map(|ancestor| ancestor.item.clone())
                    .collect();

                path.reverse();
                (path, node.count)
            })
            .collect()
    }

    /// Parent, grandparent and so on up to and including the root.
    pub fn ancestors<'a>(
        &'a self,
        node: &FPNode<I>,
    ) -> impl Iterator<Item = &'a FPNode<I>> + 'a {
        std::iter::successors(node.parent, move |&i| self.nodes[i].parent)
            .map(move |i| &self.nodes[i])
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let current_node = &self.nodes[current_index];

            match current_node.children.len() {
                0 => return true,
                1 => {}
                _ => return false,
            }

            match current_node.children.values().next() {
                Some(&child) => current_index = child,
                None => return true,
            }
        }
    }

    /// Items and counts from the root down, following the first child at each
    /// level. Only meaningful when `has_single_path` holds.
    pub fn single_path(&self) -> Vec<(I, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = &child_node.item {
                path.push((item.clone(), child_node.count));
            }
            current_index = child_index;
        }
        path
    }
}

pub struct SameItemNodes<'a, I> {
    tree: &'a FPTree<I>,
    next: Option<usize>,
}

impl<'a, I> Iterator for SameItemNodes<'a, I> {
    type Item = &'a FPNode<I>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = &tree.nodes[self.next?];
        self.next = node.neighbor;
        Some(node)
    }
}

impl<I: fmt::Debug> fmt::Display for FPNode<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            None => write!(f, "<FPNode (root)>"),
            Some(item) => write!(f, "<FPNode {:?} ({})>", item, self.count),
        }
    }
}

impl<I: Eq + Hash + Clone + fmt::Debug> FPTree<I> {
    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, index: usize, depth: usize) -> fmt::Result {
        let node = &self.nodes[index];
        writeln!(f, "{:indent$}{}", "", node, indent = depth * 2)?;

        // Creation order, independent of hash iteration order.
        let mut children: Vec<usize> = node.children.values().copied().collect();
        children.sort_unstable();
        for child in children {
            self.fmt_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented tree dump followed by each item's same-item chain.
impl<I: Eq + Hash + Clone + fmt::Debug> fmt::Display for FPTree<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree:")?;
        self.fmt_subtree(f, self.root_index, 1)?;

        writeln!(f)?;
        writeln!(f, "Routes:")?;
        for item in &self.first_seen {
            writeln!(f, "  {:?}", item)?;
            for node in self.item_nodes(item) {
                writeln!(f, "    {}", node)?;
            }
        }
        Ok(())
    }
}
