//! List Operations
//!
//! Pure mutations over a todo list. Each takes the current list and returns
//! the next one; the caller decides when to persist it.

use crate::item::ListItem;

/// Append a trimmed item. Blank input returns the list unchanged.
pub fn add(list: &[ListItem], text: &str) -> Vec<ListItem> {
    let trimmed = text.trim();
    let mut next = list.to_vec();
    if !trimmed.is_empty() {
        next.push(ListItem::new(trimmed));
    }
    next
}

/// Remove the item at `index`; later items shift down by one.
pub fn remove(list: &[ListItem], index: usize) -> Vec<ListItem> {
    let mut next = list.to_vec();
    if index < next.len() {
        next.remove(index);
    } else {
        log::warn!("remove: index {} out of range (len {})", index, list.len());
    }
    next
}

pub fn clear() -> Vec<ListItem> {
    Vec::new()
}

/// Enter edit mode, seeding the draft from the committed text.
pub fn begin_edit(list: &[ListItem], index: usize) -> Vec<ListItem> {
    update_at(list, index, "begin_edit", |item| {
        item.is_editing = true;
        item.edit_text = item.text.clone();
    })
}

pub fn update_edit_text(list: &[ListItem], index: usize, value: &str) -> Vec<ListItem> {
    update_at(list, index, "update_edit_text", |item| {
        item.edit_text = value.to_string();
    })
}

/// Commit the trimmed draft and leave edit mode.
///
/// Unlike [`add`], an empty draft is accepted and leaves an empty item.
pub fn commit_edit(list: &[ListItem], index: usize) -> Vec<ListItem> {
    update_at(list, index, "commit_edit", |item| {
        item.text = item.edit_text.trim().to_string();
        item.is_editing = false;
    })
}

pub fn toggle_done(list: &[ListItem], index: usize) -> Vec<ListItem> {
    update_at(list, index, "toggle_done", |item| {
        item.is_done = !item.is_done;
    })
}

fn update_at(
    list: &[ListItem],
    index: usize,
    op: &str,
    f: impl FnOnce(&mut ListItem),
) -> Vec<ListItem> {
    let mut next = list.to_vec();
    match next.get_mut(index) {
        Some(item) => f(item),
        None => log::warn!("{}: index {} out of range (len {})", op, index, list.len()),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ListItem> {
        vec![ListItem::new("A"), ListItem::new("B"), ListItem::new("C")]
    }

    #[test]
    fn test_add_trims() {
        let list = add(&[], "  wash car  ");
        assert_eq!(list, vec![ListItem::new("wash car")]);
        assert_eq!(list[0].edit_text, "wash car");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let list = sample();
        assert_eq!(add(&list, "   "), list);
        assert_eq!(add(&list, ""), list);
    }

    #[test]
    fn test_add_appends_at_end() {
        let list = add(&sample(), "D");
        assert_eq!(list.len(), 4);
        assert_eq!(list[3].text, "D");
    }

    #[test]
    fn test_remove_by_index() {
        let list = remove(&sample(), 1);
        assert_eq!(list, vec![ListItem::new("A"), ListItem::new("C")]);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let list = sample();
        assert_eq!(remove(&list, 3), list);
        assert_eq!(begin_edit(&list, 9), list);
        assert_eq!(update_edit_text(&list, 9, "x"), list);
        assert_eq!(commit_edit(&list, 9), list);
        assert_eq!(toggle_done(&list, 9), list);
    }

    #[test]
    fn test_clear() {
        assert!(clear().is_empty());
    }

    #[test]
    fn test_edit_cycle() {
        let list = vec![ListItem::new("x")];

        let list = begin_edit(&list, 0);
        assert!(list[0].is_editing);
        assert_eq!(list[0].edit_text, "x");

        let list = update_edit_text(&list, 0, "y");
        assert_eq!(list[0].edit_text, "y");
        assert_eq!(list[0].text, "x");

        let list = commit_edit(&list, 0);
        assert_eq!(list, vec![ListItem::new("y")]);
    }

    #[test]
    fn test_begin_edit_discards_stale_draft() {
        let mut list = vec![ListItem::new("x")];
        list[0].edit_text = "stale".to_string();
        let list = begin_edit(&list, 0);
        assert_eq!(list[0].edit_text, "x");
    }

    #[test]
    fn test_commit_trims_but_keeps_draft() {
        let list = begin_edit(&[ListItem::new("x")], 0);
        let list = update_edit_text(&list, 0, "  y  ");
        let list = commit_edit(&list, 0);
        assert_eq!(list[0].text, "y");
        assert_eq!(list[0].edit_text, "  y  ");
    }

    #[test]
    fn test_commit_accepts_empty_text() {
        let list = begin_edit(&[ListItem::new("x")], 0);
        let list = update_edit_text(&list, 0, "   ");
        let list = commit_edit(&list, 0);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].text, "");
        assert!(!list[0].is_editing);
    }

    #[test]
    fn test_toggle_done_only_touches_target() {
        let list = toggle_done(&sample(), 2);
        assert!(!list[0].is_done);
        assert!(!list[1].is_done);
        assert!(list[2].is_done);

        let list = toggle_done(&list, 2);
        assert!(!list[2].is_done);
    }

    #[test]
    fn test_input_list_untouched() {
        let list = sample();
        let _ = begin_edit(&list, 0);
        let _ = toggle_done(&list, 0);
        assert_eq!(list, sample());
    }
}
