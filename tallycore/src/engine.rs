//! Accumulator engine — the running result, the pending operator, and the
//! live entry buffer.
//!
//! At most one operator is pending at a time, and it is folded eagerly:
//! selecting an operator combines whatever was typed with the accumulator
//! before the new operator becomes pending. There is no precedence and no
//! expression tree — `2 + 3 * 4` evaluates as `(2 + 3) * 4` on this keypad.
//!
//! The first operator press simply seeds the accumulator, because the
//! combine rule for [`BinaryOp::None`] is "operand replaces accumulator".

use crate::error::CalcError;

/// A binary operator, either pending or being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// No operator pending. Folding through `None` replaces the accumulator
    /// with the operand.
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Combine the accumulator with a freshly parsed operand.
    pub fn apply(self, accumulator: f64, operand: f64) -> Result<f64, CalcError> {
        match self {
            BinaryOp::None => Ok(operand),
            BinaryOp::Add => Ok(accumulator + operand),
            BinaryOp::Subtract => Ok(accumulator - operand),
            BinaryOp::Multiply => Ok(accumulator * operand),
            BinaryOp::Divide => {
                if operand == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(accumulator / operand)
                }
            }
            BinaryOp::Power => Ok(accumulator.powf(operand)),
        }
    }
}

/// A scientific one-operand function.
///
/// `sin` and `cos` take degrees. `sqrt` and `log` of a negative operand
/// produce NaN, which propagates like any other float value — no error is
/// raised for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sin,
    Cos,
    Sqrt,
    Log10,
    Square,
}

impl UnaryFn {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryFn::Sin => x.to_radians().sin(),
            UnaryFn::Cos => x.to_radians().cos(),
            UnaryFn::Sqrt => x.sqrt(),
            UnaryFn::Log10 => x.log10(),
            UnaryFn::Square => x * x,
        }
    }
}

/// Which keys a keypad exposes.
///
/// One engine type serves both calculator variants; the scientific keys are
/// simply rejected on a basic keypad instead of extending the engine by
/// subtyping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySet {
    Basic,
    Scientific,
}

impl KeySet {
    pub fn scientific(self) -> bool {
        self == KeySet::Scientific
    }
}

/// Calculator state for one window.
///
/// Created fresh when the window opens, mutated in place by every key
/// press, reset wholesale on `C` and after every error. Never shared:
/// each window owns its own engine, so no locking exists anywhere.
#[derive(Debug, Clone)]
pub struct Engine {
    accumulator: f64,
    pending: BinaryOp,
    input: String,
    awaiting_entry: bool,
    keyset: KeySet,
}

impl Engine {
    pub fn new(keyset: KeySet) -> Self {
        Self {
            accumulator: 0.0,
            pending: BinaryOp::None,
            input: String::new(),
            awaiting_entry: true,
            keyset,
        }
    }

    pub fn keyset(&self) -> KeySet {
        self.keyset
    }

    /// The live entry buffer ("" when nothing is being typed).
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending(&self) -> BinaryOp {
        self.pending
    }

    /// Append a digit or the decimal point to the entry buffer.
    ///
    /// A second decimal point is appended as-is; the buffer then fails to
    /// parse at the next fold and surfaces as [`CalcError::BadNumber`].
    /// The original keypad never validated the buffer while typing.
    pub fn append(&mut self, token: char) {
        if self.awaiting_entry {
            self.input.clear();
            self.awaiting_entry = false;
        }
        self.input.push(token);
    }

    /// Fold the buffer into the accumulator and make `op` pending.
    ///
    /// With nothing typed this just replaces the pending operator.
    pub fn select_operator(&mut self, op: BinaryOp) -> Result<(), CalcError> {
        if !self.input.is_empty() {
            let operand = self.parse_input()?;
            self.accumulator = self.pending.apply(self.accumulator, operand)?;
        }
        self.pending = op;
        self.input.clear();
        self.awaiting_entry = true;
        Ok(())
    }

    /// Apply the pending operator to the typed operand and commit.
    ///
    /// The pending operator is cleared on success, so a second `=` starts a
    /// fresh sequence instead of reapplying the last operator against its
    /// own result. On error nothing is committed; the caller resets.
    pub fn evaluate(&mut self) -> Result<f64, CalcError> {
        if self.input.is_empty() {
            return Err(CalcError::EmptyOperand);
        }
        let operand = self.parse_input()?;
        let result = self.pending.apply(self.accumulator, operand)?;
        self.accumulator = result;
        self.pending = BinaryOp::None;
        self.input.clear();
        self.awaiting_entry = true;
        Ok(result)
    }

    /// Apply a scientific function to the typed operand; the result
    /// replaces the accumulator.
    pub fn apply_unary(&mut self, f: UnaryFn) -> Result<f64, CalcError> {
        let operand = self.parse_input()?;
        let result = f.apply(operand);
        self.accumulator = result;
        self.input.clear();
        self.awaiting_entry = true;
        Ok(result)
    }

    /// Back to the initial state. Used for `C` and after every error.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pending = BinaryOp::None;
        self.input.clear();
        self.awaiting_entry = true;
    }

    fn parse_input(&self) -> Result<f64, CalcError> {
        self.input.parse().map_err(|_| CalcError::BadNumber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> Engine {
        Engine::new(KeySet::Basic)
    }

    fn scientific() -> Engine {
        Engine::new(KeySet::Scientific)
    }

    #[test]
    fn digits_concatenate() {
        let mut e = basic();
        for c in ['1', '2', '.', '5'] {
            e.append(c);
        }
        assert_eq!(e.input(), "12.5");
    }

    #[test]
    fn first_operator_seeds_the_accumulator() {
        let mut e = basic();
        e.append('7');
        e.select_operator(BinaryOp::Add).unwrap();
        assert_eq!(e.accumulator(), 7.0);
        assert_eq!(e.pending(), BinaryOp::Add);
        assert_eq!(e.input(), "");
    }

    #[test]
    fn operator_with_nothing_typed_just_replaces_the_pending_op() {
        let mut e = basic();
        e.append('5');
        e.select_operator(BinaryOp::Add).unwrap();
        e.select_operator(BinaryOp::Multiply).unwrap();
        assert_eq!(e.accumulator(), 5.0);
        assert_eq!(e.pending(), BinaryOp::Multiply);
    }

    #[test]
    fn add_then_evaluate() {
        let mut e = basic();
        e.append('2');
        e.select_operator(BinaryOp::Add).unwrap();
        e.append('3');
        assert_eq!(e.evaluate(), Ok(5.0));
        assert_eq!(e.accumulator(), 5.0);
        assert_eq!(e.input(), "");
    }

    #[test]
    fn folds_eagerly_without_precedence() {
        let mut e = basic();
        e.append('2');
        e.select_operator(BinaryOp::Add).unwrap();
        e.append('3');
        e.select_operator(BinaryOp::Multiply).unwrap();
        e.append('4');
        assert_eq!(e.evaluate(), Ok(20.0));
    }

    #[test]
    fn evaluate_with_empty_buffer_is_rejected() {
        let mut e = basic();
        assert_eq!(e.evaluate(), Err(CalcError::EmptyOperand));
    }

    #[test]
    fn evaluate_clears_the_pending_operator() {
        // A second `=` must not reapply the last operator.
        let mut e = basic();
        e.append('2');
        e.select_operator(BinaryOp::Add).unwrap();
        e.append('3');
        e.evaluate().unwrap();
        assert_eq!(e.pending(), BinaryOp::None);
        assert_eq!(e.evaluate(), Err(CalcError::EmptyOperand));
    }

    #[test]
    fn divide_by_zero_is_an_error_and_commits_nothing() {
        let mut e = basic();
        e.append('8');
        e.select_operator(BinaryOp::Divide).unwrap();
        e.append('0');
        assert_eq!(e.evaluate(), Err(CalcError::DivideByZero));
        assert_eq!(e.accumulator(), 8.0);
    }

    #[test]
    fn divide_by_zero_while_folding_an_operator() {
        let mut e = basic();
        e.append('8');
        e.select_operator(BinaryOp::Divide).unwrap();
        e.append('0');
        assert_eq!(
            e.select_operator(BinaryOp::Multiply),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn malformed_buffer_fails_to_parse() {
        let mut e = basic();
        for c in ['2', '.', '.', '5'] {
            e.append(c);
        }
        assert_eq!(e.evaluate(), Err(CalcError::BadNumber));
    }

    #[test]
    fn typing_after_an_operator_starts_a_fresh_entry() {
        let mut e = basic();
        e.append('7');
        e.select_operator(BinaryOp::Add).unwrap();
        e.append('3');
        assert_eq!(e.input(), "3");
    }

    #[test]
    fn sqrt_of_sixteen() {
        let mut e = scientific();
        e.append('1');
        e.append('6');
        assert_eq!(e.apply_unary(UnaryFn::Sqrt), Ok(4.0));
        assert_eq!(e.accumulator(), 4.0);
        assert_eq!(e.input(), "");
    }

    #[test]
    fn sqrt_of_negative_propagates_nan() {
        let mut e = scientific();
        e.append('-');
        e.append('4');
        let result = e.apply_unary(UnaryFn::Sqrt).unwrap();
        assert!(result.is_nan());
        assert!(e.accumulator().is_nan());
    }

    #[test]
    fn sin_and_cos_take_degrees() {
        let mut e = scientific();
        e.append('9');
        e.append('0');
        let sin = e.apply_unary(UnaryFn::Sin).unwrap();
        assert!((sin - 1.0).abs() < 1e-12);

        e.append('0');
        let cos = e.apply_unary(UnaryFn::Cos).unwrap();
        assert!((cos - 1.0).abs() < 1e-12);
    }

    #[test]
    fn log_is_base_ten() {
        let mut e = scientific();
        for c in ['1', '0', '0'] {
            e.append(c);
        }
        assert_eq!(e.apply_unary(UnaryFn::Log10), Ok(2.0));
    }

    #[test]
    fn square_then_binary_power() {
        let mut e = scientific();
        e.append('3');
        assert_eq!(e.apply_unary(UnaryFn::Square), Ok(9.0));
        e.select_operator(BinaryOp::Power).unwrap();
        e.append('2');
        assert_eq!(e.evaluate(), Ok(81.0));
    }

    #[test]
    fn unary_with_empty_buffer_is_a_parse_error() {
        let mut e = scientific();
        assert_eq!(e.apply_unary(UnaryFn::Cos), Err(CalcError::BadNumber));
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut e = scientific();
        e.append('4');
        e.select_operator(BinaryOp::Add).unwrap();
        e.append('2');
        e.reset();
        assert_eq!(e.accumulator(), 0.0);
        assert_eq!(e.pending(), BinaryOp::None);
        assert_eq!(e.input(), "");
    }
}
