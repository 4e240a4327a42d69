use order_client::{Order, OrderRequest};

/// Which way a submit goes: POST a new order, or PUT over the order whose id is held here. The id is captured when
/// edit mode is entered and is the only thing that decides the target resource; nothing in the form carries identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            FormMode::Edit(id) => Some(*id),
            FormMode::Create => None,
        }
    }
}

/// The editable form fields. An empty `status` string means "no status set" and is dropped from the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: u32,
    pub status: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self { customer_name: String::new(), product_name: String::new(), quantity: 1, status: String::new() }
    }
}

/// The console's only mutable UI state: the current form contents and the mode governing what a submit does.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub form: OrderForm,
}

impl FormState {
    /// Return to create mode with a pristine form. Safe to call any number of times.
    pub fn enter_create_mode(&mut self) {
        self.mode = FormMode::Create;
        self.form = OrderForm::default();
    }

    /// Target `order` for editing and populate the form from it. A zero quantity falls back to 1, a missing status
    /// to the empty string.
    pub fn enter_edit_mode(&mut self, order: &Order) {
        self.mode = FormMode::Edit(order.id);
        self.form = OrderForm {
            customer_name: order.customer_name.clone(),
            product_name: order.product_name.clone(),
            quantity: if order.quantity == 0 { 1 } else { order.quantity },
            status: order.status.clone().unwrap_or_default(),
        };
    }

    /// Build the submit payload from the form fields.
    pub fn payload(&self) -> OrderRequest {
        let status = match self.form.status.trim() {
            "" => None,
            s => Some(s.to_string()),
        };
        OrderRequest {
            customer_name: self.form.customer_name.clone(),
            product_name: self.form.product_name.clone(),
            quantity: self.form.quantity,
            status,
        }
    }

    /// Called after every list refresh. An edit target that is no longer on the server cannot be updated, so drop
    /// back to create mode and say so, rather than keeping a highlight that no row matches.
    pub fn reconcile_with(&mut self, orders: &[Order]) -> Option<String> {
        match self.mode.editing_id() {
            Some(id) if !orders.iter().any(|o| o.id == id) => {
                self.enter_create_mode();
                Some(format!("Order #{id} is no longer on the server. Returning to create mode."))
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_order() -> Order {
        Order {
            id: 7,
            customer_name: "Alice".to_string(),
            product_name: "Widget".to_string(),
            quantity: 2,
            status: Some("NEW".to_string()),
            created_at: Some("2025-06-02T09:14:55+02:00".to_string()),
            processed_at: None,
        }
    }

    #[test]
    fn starts_in_create_mode_with_a_blank_form() {
        let state = FormState::default();
        assert_eq!(state.mode, FormMode::Create);
        assert_eq!(state.form.quantity, 1);
        assert!(state.form.customer_name.is_empty());
        assert!(state.form.status.is_empty());
    }

    #[test]
    fn create_edit_create_restores_the_pristine_form() {
        let mut state = FormState::default();
        state.enter_create_mode();
        state.enter_edit_mode(&sample_order());
        assert_eq!(state.mode, FormMode::Edit(7));
        assert_eq!(state.form.customer_name, "Alice");
        state.enter_create_mode();
        assert_eq!(state, FormState::default());
        // and entering create mode again changes nothing
        state.enter_create_mode();
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn edit_mode_falls_back_for_missing_fields() {
        let mut order = sample_order();
        order.quantity = 0;
        order.status = None;
        let mut state = FormState::default();
        state.enter_edit_mode(&order);
        assert_eq!(state.form.quantity, 1);
        assert_eq!(state.form.status, "");
    }

    #[test]
    fn payload_drops_an_empty_status() {
        let mut state = FormState::default();
        state.form.customer_name = "Alice".to_string();
        state.form.product_name = "Widget".to_string();
        state.form.quantity = 2;
        state.form.status = "   ".to_string();
        let payload = state.payload();
        assert_eq!(payload.status, None);
        assert_eq!(payload.customer_name, "Alice");
        assert_eq!(payload.quantity, 2);
    }

    #[test]
    fn payload_keeps_a_non_empty_status() {
        let mut state = FormState::default();
        state.enter_edit_mode(&sample_order());
        state.form.status = "CANCELLED".to_string();
        assert_eq!(state.payload().status.as_deref(), Some("CANCELLED"));
        // the edit target still comes from the mode, untouched by form edits
        assert_eq!(state.mode.editing_id(), Some(7));
    }

    #[test]
    fn refresh_without_the_edited_order_forces_create_mode() {
        let mut state = FormState::default();
        state.enter_edit_mode(&sample_order());
        let mut remaining = sample_order();
        remaining.id = 8;
        let notice = state.reconcile_with(&[remaining]);
        assert!(notice.unwrap().contains("Order #7"));
        assert_eq!(state.mode, FormMode::Create);
    }

    #[test]
    fn refresh_with_the_edited_order_present_keeps_edit_mode() {
        let mut state = FormState::default();
        state.enter_edit_mode(&sample_order());
        let notice = state.reconcile_with(&[sample_order()]);
        assert!(notice.is_none());
        assert_eq!(state.mode, FormMode::Edit(7));
    }

    #[test]
    fn refresh_in_create_mode_is_a_no_op() {
        let mut state = FormState::default();
        assert!(state.reconcile_with(&[]).is_none());
        assert_eq!(state.mode, FormMode::Create);
    }
}
