use std::fmt;

use crate::error::MinigradError;
use crate::ops::activation::relu::ReluBackward;
use crate::ops::activation::sigmoid::SigmoidBackward;
use crate::ops::activation::tanh::TanhBackward;
use crate::ops::arithmetic::add::AddBackward;
use crate::ops::arithmetic::div::DivBackward;
use crate::ops::arithmetic::mul::MulBackward;
use crate::ops::arithmetic::neg::NegBackward;
use crate::ops::arithmetic::pow::PowBackward;
use crate::ops::arithmetic::square::SquareBackward;
use crate::ops::arithmetic::sub::SubBackward;
use crate::ops::concat::ConcatBackward;
use crate::ops::reduction::mean::MeanBackward;
use crate::ops::reduction::sum::SumBackward;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Gradient contributions returned by a backward rule, one slot per input.
///
/// A slot is `None` when the matching input does not require a gradient.
pub type InputGrads<T> = Vec<Option<Vec<T>>>;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Every operation that records a node has a context struct implementing this
/// trait. The struct stores exactly the forward-pass state its rule needs
/// (operand handles, saved outputs, constants).
pub trait BackwardRule<T> {
    /// Computes dL/dInput_i for every input, given dL/dOutput (`grad_output`).
    ///
    /// `grad_output` has the element count of the operation's output. The
    /// returned vector **must** have one entry per input, in the same order
    /// as `inputs()`, and each `Some` entry must have the element count of
    /// the matching input.
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError>;

    /// The operands of the forward operation, in argument order.
    fn inputs(&self) -> Vec<&Tensor<T>>;
}

/// The kind of operation that produced a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pow,
    Square,
    Relu,
    Sigmoid,
    Tanh,
    Sum,
    Mean,
    Concatenate,
}

impl OpKind {
    pub fn name(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Sub => "sub",
            OpKind::Mul => "mul",
            OpKind::Div => "div",
            OpKind::Neg => "neg",
            OpKind::Pow => "pow",
            OpKind::Square => "square",
            OpKind::Relu => "relu",
            OpKind::Sigmoid => "sigmoid",
            OpKind::Tanh => "tanh",
            OpKind::Sum => "sum",
            OpKind::Mean => "mean",
            OpKind::Concatenate => "concatenate",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Backward node stored in a tensor's `grad_fn`: one case per supported
/// operation, so dispatch is a closed, exhaustive match.
pub enum BackwardOp<T> {
    Add(AddBackward<T>),
    Sub(SubBackward<T>),
    Mul(MulBackward<T>),
    Div(DivBackward<T>),
    Neg(NegBackward<T>),
    Pow(PowBackward<T>),
    Square(SquareBackward<T>),
    Relu(ReluBackward<T>),
    Sigmoid(SigmoidBackward<T>),
    Tanh(TanhBackward<T>),
    Sum(SumBackward<T>),
    Mean(MeanBackward<T>),
    Concatenate(ConcatBackward<T>),
}

macro_rules! dispatch {
    ($self:expr, $op:ident => $body:expr) => {
        match $self {
            BackwardOp::Add($op) => $body,
            BackwardOp::Sub($op) => $body,
            BackwardOp::Mul($op) => $body,
            BackwardOp::Div($op) => $body,
            BackwardOp::Neg($op) => $body,
            BackwardOp::Pow($op) => $body,
            BackwardOp::Square($op) => $body,
            BackwardOp::Relu($op) => $body,
            BackwardOp::Sigmoid($op) => $body,
            BackwardOp::Tanh($op) => $body,
            BackwardOp::Sum($op) => $body,
            BackwardOp::Mean($op) => $body,
            BackwardOp::Concatenate($op) => $body,
        }
    };
}

impl<T> BackwardOp<T> {
    /// Operand handles read straight from the node, without the numeric bound
    /// `BackwardRule` needs. Used when tearing the graph down.
    pub(crate) fn operand_handles(&self) -> Vec<&Tensor<T>> {
        match self {
            BackwardOp::Add(op) => vec![&op.a, &op.b],
            BackwardOp::Sub(op) => vec![&op.a, &op.b],
            BackwardOp::Mul(op) => vec![&op.a, &op.b],
            BackwardOp::Div(op) => vec![&op.a, &op.b],
            BackwardOp::Concatenate(op) => vec![&op.a, &op.b],
            BackwardOp::Neg(op) => vec![&op.input],
            BackwardOp::Pow(op) => vec![&op.input],
            BackwardOp::Square(op) => vec![&op.input],
            BackwardOp::Relu(op) => vec![&op.input],
            BackwardOp::Sigmoid(op) => vec![&op.input],
            BackwardOp::Tanh(op) => vec![&op.input],
            BackwardOp::Sum(op) => vec![&op.input],
            BackwardOp::Mean(op) => vec![&op.input],
        }
    }
}

impl<T: NumericElement> BackwardOp<T> {
    pub fn kind(&self) -> OpKind {
        match self {
            BackwardOp::Add(_) => OpKind::Add,
            BackwardOp::Sub(_) => OpKind::Sub,
            BackwardOp::Mul(_) => OpKind::Mul,
            BackwardOp::Div(_) => OpKind::Div,
            BackwardOp::Neg(_) => OpKind::Neg,
            BackwardOp::Pow(_) => OpKind::Pow,
            BackwardOp::Square(_) => OpKind::Square,
            BackwardOp::Relu(_) => OpKind::Relu,
            BackwardOp::Sigmoid(_) => OpKind::Sigmoid,
            BackwardOp::Tanh(_) => OpKind::Tanh,
            BackwardOp::Sum(_) => OpKind::Sum,
            BackwardOp::Mean(_) => OpKind::Mean,
            BackwardOp::Concatenate(_) => OpKind::Concatenate,
        }
    }

    pub fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        dispatch!(self, op => op.backward(grad_output))
    }

    pub fn inputs(&self) -> Vec<&Tensor<T>> {
        dispatch!(self, op => op.inputs())
    }
}

impl<T: NumericElement> fmt::Debug for BackwardOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Backward(inputs={})", self.kind(), self.inputs().len())
    }
}
