use super::token::{DelimiterToken, Role};

/// Finds the index of the token paired with `tokens[current]`.
///
/// Openings search forward, closings search backward. Tokens with the same
/// role as the origin are pushed; a token of the opposite role pops only when
/// its colon count equals the top of the stack and is otherwise ignored. The
/// token that empties the stack is the partner.
pub fn find_partner(tokens: &[DelimiterToken], current: usize) -> Option<usize> {
    let origin = tokens.get(current)?;
    match origin.role {
        Role::Opening => walk(origin, tokens.iter().enumerate().skip(current + 1)),
        Role::Closing => walk(origin, tokens.iter().enumerate().take(current).rev()),
    }
}

fn walk<'a>(
    origin: &DelimiterToken,
    steps: impl Iterator<Item = (usize, &'a DelimiterToken)>,
) -> Option<usize> {
    let mut stack = vec![origin.colon_count];

    for (index, token) in steps {
        if token.role == origin.role {
            stack.push(token.colon_count);
            continue;
        }
        if stack.last() == Some(&token.colon_count) {
            stack.pop();
            if stack.is_empty() {
                return Some(index);
            }
        }
    }
    None
}
