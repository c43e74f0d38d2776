pub mod comb;

use std::fmt;

/// A generic syntax tree node produced by the grammar front-end.
///
/// The tag is a `|`-separated hierarchical label; the rightmost segment is
/// the most specific and names the production or literal kind that created
/// the node. Leaves carry the matched text in `contents`; internal nodes
/// usually have empty contents and one or more children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    tag: String,
    contents: String,
    children: Vec<Ast>,
}

impl Ast {
    /// Allocate a leaf node.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Ast {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Allocate an internal node.
    pub fn node(tag: impl Into<String>, children: Vec<Ast>) -> Self {
        Ast {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn children(&self) -> &[Ast] {
        &self.children
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Ast) {
        self.children.push(child);
    }

    /// Wrap this node in a synthetic `>` root, presenting a single
    /// top-level result.
    pub fn insert_root(self) -> Ast {
        Ast::node(">", vec![self])
    }

    /// Prepend a tag segment: a node tagged `regex` re-tagged with `value`
    /// becomes `value|regex`.
    pub fn retag_prefix(&mut self, name: &str) {
        if self.tag.is_empty() {
            self.tag = name.to_string();
        } else {
            self.tag = format!("{}|{}", name, self.tag);
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        if self.children.is_empty() || !self.contents.is_empty() {
            write!(f, "{} '{}'", self.tag, self.contents)?;
        } else {
            write!(f, "{}", self.tag)?;
        }
        for child in &self.children {
            writeln!(f)?;
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// The textual tree form: two spaces of indentation per depth, leaves as
/// `<tag> '<contents>'`, internal nodes as `<tag>` followed by children.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
