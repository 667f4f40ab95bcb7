//! Состояние навигатора категорий.
//!
//! Категории приходят плоским списком имён; имя с `/` вкладывается под
//! родительский путь. Ключ узла это полный путь, поэтому раскрытие
//! переживает повторную загрузку, пока имя не меняется.

use std::collections::HashSet;

pub const PATH_SEPARATOR: char = '/';

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryNode {
    /// Полный путь, он же значение фильтра `category`
    pub key: String,
    /// Последний сегмент пути, показывается в дереве
    pub name: String,
    pub is_expanded: bool,
    /// `None` у листьев (без стрелки раскрытия)
    pub children: Option<Vec<CategoryNode>>,
}

impl CategoryNode {
    fn new(key: String, name: &str) -> Self {
        Self {
            key,
            name: name.to_string(),
            is_expanded: false,
            children: None,
        }
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// Одна строка отрисованного дерева
#[derive(Clone, Debug, PartialEq)]
pub struct TreeRow {
    pub key: String,
    pub name: String,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryTree {
    roots: Vec<CategoryNode>,
}

impl CategoryTree {
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut tree = Self::default();
        for name in names {
            tree.insert_path(name.as_ref());
        }
        tree
    }

    /// Новое дерево для `names` с переносом раскрытия уцелевших ключей
    pub fn rebuild<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let expanded = self.expanded_keys();
        let mut tree = Self::from_names(names);
        for_each_node_mut(&mut tree.roots, &mut |node| {
            node.is_expanded = expanded.contains(&node.key);
        });
        tree
    }

    pub fn roots(&self) -> &[CategoryNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&CategoryNode> {
        find_in(&self.roots, key)
    }

    /// Переключает `is_expanded` только у узла `key`.
    /// Возвращает false, если узла нет.
    pub fn toggle(&mut self, key: &str) -> bool {
        match find_in_mut(&mut self.roots, key) {
            Some(node) => {
                node.is_expanded = !node.is_expanded;
                true
            }
            None => false,
        }
    }

    pub fn expanded_keys(&self) -> HashSet<String> {
        let mut keys = HashSet::new();
        for_each_node(&self.roots, &mut |node| {
            if node.is_expanded {
                keys.insert(node.key.clone());
            }
        });
        keys
    }

    /// Строки в глубину; дети свёрнутых узлов пропускаются
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        collect_rows(&self.roots, 0, &mut rows);
        rows
    }

    fn insert_path(&mut self, path: &str) {
        if path.trim().is_empty() {
            return;
        }

        // Ключи совпадают с присланными сервером строками байт в байт.
        // Имя с пустым сегментом ("a//b", "/a") остаётся плоским листом.
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            if find_in(&self.roots, path).is_none() {
                self.roots.push(CategoryNode::new(path.to_string(), path.trim()));
            }
            return;
        }

        let mut level = &mut self.roots;
        let mut key = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                key.push(PATH_SEPARATOR);
            }
            key.push_str(segment);

            let index = match level.iter().position(|n| n.key == key) {
                Some(index) => index,
                None => {
                    level.push(CategoryNode::new(key.clone(), segment.trim()));
                    level.len() - 1
                }
            };

            if i + 1 < segments.len() {
                level = level[index].children.get_or_insert_with(Vec::new);
            }
        }
    }
}

fn find_in<'a>(nodes: &'a [CategoryNode], key: &str) -> Option<&'a CategoryNode> {
    nodes.iter().find_map(|node| {
        if node.key == key {
            Some(node)
        } else {
            node.children.as_deref().and_then(|c| find_in(c, key))
        }
    })
}

fn find_in_mut<'a>(nodes: &'a mut [CategoryNode], key: &str) -> Option<&'a mut CategoryNode> {
    for node in nodes.iter_mut() {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = node.children.as_deref_mut().and_then(|c| find_in_mut(c, key)) {
            return Some(found);
        }
    }
    None
}

fn for_each_node(nodes: &[CategoryNode], f: &mut impl FnMut(&CategoryNode)) {
    for node in nodes {
        f(node);
        if let Some(children) = &node.children {
            for_each_node(children, f);
        }
    }
}

fn for_each_node_mut(nodes: &mut [CategoryNode], f: &mut impl FnMut(&mut CategoryNode)) {
    for node in nodes {
        f(node);
        if let Some(children) = node.children.as_deref_mut() {
            for_each_node_mut(children, f);
        }
    }
}

fn collect_rows(nodes: &[CategoryNode], depth: usize, rows: &mut Vec<TreeRow>) {
    for node in nodes {
        rows.push(TreeRow {
            key: node.key.clone(),
            name: node.name.clone(),
            depth,
            has_children: node.has_children(),
            is_expanded: node.is_expanded,
        });
        if node.is_expanded {
            if let Some(children) = &node.children {
                collect_rows(children, depth + 1, rows);
            }
        }
    }
}
