use crate::Rule;

use pest::iterators::Pair;

/// Renders a parse tree one node per line, children indented under their parent. Leaves are
/// followed by the text they matched.
pub fn dump_pair(pair: &Pair<'_, Rule>) -> String {
    let mut buf = String::new();
    write_pair(pair, 0, &mut buf);
    buf
}

fn write_pair(pair: &Pair<'_, Rule>, indent: usize, buf: &mut String) {
    buf.push_str(&"  ".repeat(indent));
    let mut children = pair.clone().into_inner().peekable();
    if children.peek().is_none() {
        buf.push_str(&format!("{:?} {:?}\n", pair.as_rule(), pair.as_str()));
        return;
    }
    buf.push_str(&format!("{:?}\n", pair.as_rule()));
    for child in children {
        write_pair(&child, indent + 1, buf);
    }
}
