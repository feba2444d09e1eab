use super::node::TrieNode;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

enum Step<'a> {
    Enter(u8, &'a TrieNode),
    Leave,
}

/// Collect every stored key in the subtree under `root` into `out`.
///
/// `acc` holds the bytes spelled by the path from the trie root down to
/// `root`; emitted keys are full keys, accumulator included. Keys come out
/// in ascending byte order, which is lexicographic order over the subtree.
/// Uses an explicit stack so arbitrarily long keys cannot overflow the
/// native stack.
pub(super) fn collect_keys(root: &TrieNode, mut acc: Vec<u8>, out: &mut Vec<Vec<u8>>) {
    let mut stack: Vec<Step> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);

    if root.is_terminal() {
        out.push(acc.clone());
    }
    for (byte, child) in root.children().rev() {
        stack.push(Step::Enter(byte, child));
    }

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(byte, node) => {
                acc.push(byte);
                if node.is_terminal() {
                    out.push(acc.clone());
                }
                // Leave lands below this node's children on the stack, so it
                // pops only after the whole subtree has been walked.
                stack.push(Step::Leave);
                for (b, child) in node.children().rev() {
                    stack.push(Step::Enter(b, child));
                }
            }
            Step::Leave => {
                acc.pop();
            }
        }
    }
}
