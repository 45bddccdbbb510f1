//! Structural description of the specialized implementation
//!
//! The synthesizer hands its code-synthesis collaborator a [`Blueprint`]:
//! the field layout and method bodies of the packed strategy, expressed as
//! sequences of elementary operations. The collaborator realizes the
//! description as an instantiable type; it never sees source code.

use compactlist_core::ElementKind;

/// Primitive word types a synthesized field can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotType {
    /// 64-bit signed integer word
    Int64,
    /// Index/length counter word
    Index,
}

/// Shape of a synthesized field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A single word
    Scalar(SlotType),
    /// A contiguous, exclusively-owned array of words
    Array(SlotType),
}

/// One field of the synthesized type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name
    pub name: &'static str,
    /// Field shape
    pub ty: FieldType,
}

/// Elementary operations method bodies are built from
///
/// This is the full vocabulary the collaborator must support: field and
/// array access, arithmetic, comparison, control flow, and the bridging
/// conversions between boxed values and primitive words at the contract
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Read a named field
    LoadField(&'static str),
    /// Write a named field
    StoreField(&'static str),
    /// Allocate an array of the given word type
    AllocArray(SlotType),
    /// Read an array element
    LoadElement,
    /// Write an array element
    StoreElement,
    /// Integer addition
    Add,
    /// Integer multiplication
    Mul,
    /// Less-than comparison
    CmpLt,
    /// Equality comparison
    CmpEq,
    /// Conditional branch
    Branch,
    /// Return to caller
    Return,
    /// Unbox a contract-boundary value into a primitive word
    Unbox,
    /// Re-box a primitive word for the contract boundary
    Box,
}

/// One method of the synthesized type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method name
    pub name: &'static str,
    /// Body as a sequence of elementary operations
    pub body: Vec<Op>,
}

/// Structural description handed to the code-synthesis collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    /// Name of the type to synthesize
    pub type_name: &'static str,
    /// Element kind the packed storage holds
    pub element: ElementKind,
    /// Field layout
    pub fields: Vec<FieldSpec>,
    /// Methods, constructor included
    pub methods: Vec<MethodSpec>,
}

impl Blueprint {
    /// The canonical description of the packed integer strategy
    ///
    /// Two fields (the word buffer and the length counter) and five
    /// methods: constructor, length query, append with growth, indexed
    /// read, and the internal grow step.
    pub fn packed_int() -> Self {
        use Op::*;
        Blueprint {
            type_name: "PackedIntList",
            element: ElementKind::Int,
            fields: vec![
                FieldSpec {
                    name: "buf",
                    ty: FieldType::Array(SlotType::Int64),
                },
                FieldSpec {
                    name: "len",
                    ty: FieldType::Scalar(SlotType::Index),
                },
            ],
            methods: vec![
                MethodSpec {
                    name: "new",
                    body: vec![
                        CmpLt,
                        Branch,
                        AllocArray(SlotType::Int64),
                        StoreField("buf"),
                        StoreField("len"),
                        Return,
                    ],
                },
                MethodSpec {
                    name: "len",
                    body: vec![LoadField("len"), Return],
                },
                MethodSpec {
                    name: "push",
                    body: vec![
                        LoadField("len"),
                        LoadField("buf"),
                        CmpEq,
                        Branch,
                        Unbox,
                        LoadField("buf"),
                        StoreElement,
                        LoadField("len"),
                        Add,
                        StoreField("len"),
                        Return,
                    ],
                },
                MethodSpec {
                    name: "get",
                    body: vec![
                        LoadField("len"),
                        CmpLt,
                        Branch,
                        LoadField("buf"),
                        LoadElement,
                        Box,
                        Return,
                    ],
                },
                MethodSpec {
                    name: "grow",
                    body: vec![
                        LoadField("buf"),
                        Mul,
                        CmpLt,
                        Branch,
                        AllocArray(SlotType::Int64),
                        LoadField("buf"),
                        LoadElement,
                        StoreElement,
                        StoreField("buf"),
                        Return,
                    ],
                },
            ],
        }
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a method by name
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }
}
