//! Sort tags and small enumerations stored in records.
//!
//! Discriminant values are the on-disk encoding and must not be reordered.

macro_rules! sort_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Convert from raw discriminant.
            pub fn from_u8(v: u8) -> Option<Self> {
                match v {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            #[inline]
            pub fn as_u8(self) -> u8 {
                self as u8
            }
        }
    };
}

sort_enum! {
    /// Declaration sorts.
    DeclSort {
        VendorExtension = 0,
        Enumerator = 1,
        Variable = 2,
        Parameter = 3,
        Field = 4,
        Bitfield = 5,
        Scope = 6,
        Enumeration = 7,
        Alias = 8,
        Temploid = 9,
        Template = 10,
        PartialSpecialization = 11,
        Specialization = 12,
        DefaultArgument = 13,
        Concept = 14,
        Function = 15,
        Method = 16,
        Constructor = 17,
        InheritedConstructor = 18,
        Destructor = 19,
        /// Declaration owned by an imported unit.
        Reference = 20,
        UsingDeclaration = 21,
        Prolongation = 22,
        Friend = 23,
        Expansion = 24,
        DeductionGuide = 25,
        Barren = 26,
        Tuple = 27,
        SyntaxTree = 28,
        Intrinsic = 29,
        Property = 30,
        OutputSegment = 31,
    }
}

sort_enum! {
    /// Type sorts.
    TypeSort {
        VendorExtension = 0,
        Fundamental = 1,
        Designated = 2,
        Tor = 3,
        Syntactic = 4,
        Expansion = 5,
        Pointer = 6,
        PointerToMember = 7,
        LvalueReference = 8,
        RvalueReference = 9,
        Function = 10,
        Method = 11,
        Array = 12,
        Typename = 13,
        Qualified = 14,
        Base = 15,
        Decltype = 16,
        Placeholder = 17,
        Tuple = 18,
        Forall = 19,
        Unaligned = 20,
        SyntaxTree = 21,
    }
}

sort_enum! {
    /// Expression sorts.
    ExprSort {
        VendorExtension = 0,
        Empty = 1,
        Literal = 2,
        Lambda = 3,
        Type = 4,
        NamedDecl = 5,
        UnresolvedId = 6,
        TemplateId = 7,
        UnqualifiedId = 8,
        SimpleIdentifier = 9,
        Pointer = 10,
        QualifiedName = 11,
        Path = 12,
        Read = 13,
        Monad = 14,
        Dyad = 15,
        Triad = 16,
        String = 17,
        Temporary = 18,
        Call = 19,
        MemberInitializer = 20,
        MemberAccess = 21,
        InheritancePath = 22,
        InitializerList = 23,
        Cast = 24,
        Condition = 25,
        ExpressionList = 26,
        SizeofType = 27,
        Alignof = 28,
        Label = 29,
        UnusedSort0 = 30,
        Typeid = 31,
        DestructorCall = 32,
        SyntaxTree = 33,
        FunctionString = 34,
        CompoundString = 35,
        StringSequence = 36,
        Initializer = 37,
        Requires = 38,
        UnaryFoldExpression = 39,
        BinaryFoldExpression = 40,
        HierarchyConversion = 41,
        ProductTypeValue = 42,
        SumTypeValue = 43,
        UnusedSort1 = 44,
        ArrayValue = 45,
        DynamicDispatch = 46,
        VirtualFunctionConversion = 47,
        Placeholder = 48,
        Expansion = 49,
        Generic = 50,
        Tuple = 51,
        Nullptr = 52,
        This = 53,
        TemplateReference = 54,
        Statement = 55,
        TypeTraitIntrinsic = 56,
        DesignatedInitializer = 57,
        PackedTemplateArguments = 58,
        Tokens = 59,
        AssignInitializer = 60,
    }
}

sort_enum! {
    /// Name sorts.
    NameSort {
        Identifier = 0,
        Operator = 1,
        Conversion = 2,
        Literal = 3,
        Template = 4,
        Specialization = 5,
        SourceFile = 6,
        Guide = 7,
    }
}

sort_enum! {
    /// Template parameter chart sorts.
    ChartSort {
        /// Empty parameter list (`template<>`).
        None = 0,
        /// A single parameter list.
        Unilevel = 1,
        /// Nested parameter lists of member templates.
        Multilevel = 2,
    }
}

sort_enum! {
    /// Basis of a fundamental type. Scope kinds (class, namespace, ...) are
    /// encoded as fundamental types too.
    TypeBasis {
        Void = 0,
        Bool = 1,
        Char = 2,
        WcharT = 3,
        Int = 4,
        Float = 5,
        Double = 6,
        Nullptr = 7,
        Ellipsis = 8,
        SegmentType = 9,
        Class = 10,
        Struct = 11,
        Union = 12,
        Enum = 13,
        Typename = 14,
        Namespace = 15,
        Interface = 16,
        Function = 17,
        Empty = 18,
        VariableTemplate = 19,
        Concept = 20,
        Auto = 21,
        DecltypeAuto = 22,
        Overload = 23,
    }
}

sort_enum! {
    /// Precision of a fundamental type.
    TypePrecision {
        Default = 0,
        Short = 1,
        Long = 2,
        Bit8 = 3,
        Bit16 = 4,
        Bit32 = 5,
        Bit64 = 6,
        Bit128 = 7,
    }
}

sort_enum! {
    /// Signedness of a fundamental type.
    TypeSign {
        Plain = 0,
        Signed = 1,
        Unsigned = 2,
    }
}

sort_enum! {
    /// Kind of a template or function parameter.
    ParameterSort {
        /// Function parameter.
        Object = 0,
        /// Type template parameter.
        Type = 1,
        /// Non-type template parameter.
        NonType = 2,
        /// Template template parameter.
        Template = 3,
    }
}
