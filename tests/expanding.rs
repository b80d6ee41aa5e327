#[cfg(test)]
mod verify {
    use templet::{expand, Directive, ExpandError, Formattable, Value};

    #[test]
    fn templates_without_fields_pass_through() {
        let result = expand("just some text", &[]).unwrap();
        assert_eq!(result, "just some text");

        let result = expand("closing } alone is literal", &[]).unwrap();
        assert_eq!(result, "closing } alone is literal");

        let result = expand("", &[]).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn explicit_indices_select_arguments() {
        let arguments = [Value::Text("zero"), Value::Text("one")];

        let result = expand("{1} before {0}", &arguments).unwrap();
        assert_eq!(result, "one before zero");

        // the same field renders the same regardless of position
        let result = expand("x{1}x{1}x", &arguments).unwrap();
        assert_eq!(result, "xonexonex");
    }

    #[test]
    fn auto_indexing_consumes_left_to_right() {
        let arguments = [Value::Integer(1), Value::Integer(2)];

        let result = expand("{} {}", &arguments).unwrap();
        assert_eq!(result, "1 2");
    }

    #[test]
    fn auto_indexing_wraps_around() {
        // with two arguments the third auto field reuses argument 0
        let arguments = [Value::Integer(1), Value::Integer(2)];

        let result = expand("{} {} {}", &arguments).unwrap();
        assert_eq!(result, "1 2 1");
    }

    #[test]
    fn explicit_indices_leave_the_cursor_alone() {
        let arguments = [Value::Integer(10), Value::Integer(20)];

        let result = expand("{1} {} {}", &arguments).unwrap();
        assert_eq!(result, "20 10 20");
    }

    #[test]
    fn width_fill_and_alignment() {
        let arguments = [Value::Integer(5)];

        let result = expand("{0:05}", &arguments).unwrap();
        assert_eq!(result, "00005");

        let result = expand("{0:0>5}", &arguments).unwrap();
        assert_eq!(result, "00005");

        let result = expand("{0:*<5}", &arguments).unwrap();
        assert_eq!(result, "5****");

        let result = expand("{0:*^5}", &arguments).unwrap();
        assert_eq!(result, "**5**");
    }

    #[test]
    fn zero_fill_is_sign_aware() {
        let result = expand("{0:06}", &[Value::Integer(-42)]).unwrap();
        assert_eq!(result, "-00042");
    }

    #[test]
    fn precision_rounds_decimal_places() {
        let result = expand("{0:.2f}", &[Value::Double(3.14159)]).unwrap();
        assert_eq!(result, "3.14");

        let result = expand("{0:8.3f}", &[Value::Double(2.5)]).unwrap();
        assert_eq!(result, "   2.500");
    }

    #[test]
    fn precision_truncates_text() {
        let result = expand("{0:.5}", &[Value::Text("hello world")]).unwrap();
        assert_eq!(result, "hello");
    }

    #[test]
    fn binary_is_explicit_sign_magnitude() {
        // not the hardware two's-complement encoding: the magnitude's bits
        // with the top bit forced on
        let result = expand("{0:b}", &[Value::Integer(-5)]).unwrap();
        assert_eq!(result, "10000000000000000000000000000101");
        assert_eq!(
            result
                .chars()
                .count(),
            32
        );

        let result = expand("{0:b}", &[Value::Long(3)]).unwrap();
        assert_eq!(
            result,
            "0000000000000000000000000000000000000000000000000000000000000011"
        );
    }

    #[test]
    fn radix_conversions_use_the_magnitude() {
        let result = expand("{0:x} {0:X} {0:o}", &[Value::Integer(-255)]).unwrap();
        assert_eq!(result, "-ff -FF -377");
    }

    #[test]
    fn booleans_and_characters() {
        let result = expand("{0} and {1}", &[Value::Bool(true), Value::Bool(false)]).unwrap();
        assert_eq!(result, "true and false");

        let result = expand("{0}", &[Value::Char('x')]).unwrap();
        assert_eq!(result, "x");
    }

    #[test]
    fn conversions_between_classes() {
        // a float formatted with an integer conversion truncates toward zero
        let result = expand("{0:x}", &[Value::Double(255.9)]).unwrap();
        assert_eq!(result, "ff");

        // an integer formatted as fixed-point widens to a double
        let result = expand("{0:.1f}", &[Value::Integer(7)]).unwrap();
        assert_eq!(result, "7.0");

        // a code point formatted as a character
        let result = expand("{0:c}", &[Value::Integer(97)]).unwrap();
        assert_eq!(result, "a");

        // booleans count as numbers
        let result = expand("{0:d}", &[Value::Bool(true)]).unwrap();
        assert_eq!(result, "1");
    }

    #[test]
    fn impossible_conversions_are_refused() {
        let result = expand("{0:d}", &[Value::Text("five")]);
        assert_eq!(
            result.unwrap_err(),
            ExpandError::UnsupportedConversion(0, 0, "text", "integer")
        );

        let result = expand("{0:f}", &[Value::List(vec![Value::Integer(1)])]);
        assert_eq!(
            result.unwrap_err(),
            ExpandError::UnsupportedConversion(0, 0, "list", "floating point")
        );
    }

    #[test]
    fn index_out_of_range_reports_both_numbers() {
        let arguments = [Value::Integer(1), Value::Integer(2)];

        let error = expand("{5}", &arguments).unwrap_err();
        assert_eq!(error, ExpandError::IndexOutOfRange(0, 5, 2));
        assert_eq!(
            error.message(),
            "argument index (which is 5) >= argument count (which is 2)"
        );
    }

    #[test]
    fn no_arguments_at_all() {
        let error = expand("{}", &[]).unwrap_err();
        assert_eq!(error, ExpandError::IndexOutOfRange(0, 0, 0));
    }

    #[test]
    fn subscripts_reach_into_lists_and_text() {
        let arguments = [Value::List(vec![
            Value::Integer(10),
            Value::Integer(20),
            Value::Integer(30),
        ])];

        let result = expand("{0[1]}", &arguments).unwrap();
        assert_eq!(result, "20");

        // subscripted elements take directives like any other value
        let result = expand("{0[2]:04}", &arguments).unwrap();
        assert_eq!(result, "0030");

        let result = expand("{0[1]}", &[Value::Text("abc")]).unwrap();
        assert_eq!(result, "b");

        // without an explicit index the subscript applies to the cursor's
        // argument
        let result = expand("{[0]}", &arguments).unwrap();
        assert_eq!(result, "10");
    }

    #[test]
    fn subscripting_scalars_is_refused() {
        let error = expand("{0[1]}", &[Value::Integer(5)]).unwrap_err();
        assert_eq!(error, ExpandError::UnsupportedSubscript(0, 0, "integer"));
    }

    #[test]
    fn lists_render_whole_without_a_subscript() {
        let arguments = [Value::List(vec![Value::Integer(1), Value::Integer(2)])];

        let result = expand("{0}", &arguments).unwrap();
        assert_eq!(result, "[1, 2]");
    }

    #[test]
    fn displayable_values_use_the_generic_renderer() {
        struct Coordinate {
            x: i32,
            y: i32,
        }

        impl std::fmt::Display for Coordinate {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "({}, {})", self.x, self.y)
            }
        }

        let place = Coordinate { x: 3, y: -4 };
        let arguments = [Value::Shown(&place)];

        let result = expand("at {0}", &arguments).unwrap();
        assert_eq!(result, "at (3, -4)");

        let result = expand("{0:>12}", &arguments).unwrap();
        assert_eq!(result, "     (3, -4)");
    }

    #[test]
    fn custom_formatting_wins_regardless_of_conversion() {
        struct Temperature {
            degrees: f64,
        }

        impl Formattable for Temperature {
            fn format(&self, directive: &Directive) -> String {
                let text = format!("{}°", self.degrees);
                match directive.width {
                    Some(width) if width > text.len() => {
                        format!("{}{}", " ".repeat(width - text.len()), text)
                    }
                    _ => text,
                }
            }
        }

        let reading = Temperature { degrees: 21.5 };
        let arguments = [Value::Custom(&reading)];

        let result = expand("{0}", &arguments).unwrap();
        assert_eq!(result, "21.5°");

        // a float conversion character does not drag the value through the
        // conversion layer; the custom formatter still runs
        let result = expand("{0:f}", &arguments).unwrap();
        assert_eq!(result, "21.5°");
    }

    #[test]
    fn bad_specifiers_abort_the_expansion() {
        let error = expand("ok {0:q} gone", &[Value::Integer(1)]).unwrap_err();
        assert_eq!(error, ExpandError::InvalidSpecifier(3, "0:q".to_string()));

        let error = expand("{nope}", &[Value::Integer(1)]).unwrap_err();
        assert_eq!(error, ExpandError::InvalidSpecifier(0, "nope".to_string()));
    }

    #[test]
    fn unterminated_fields_abort_the_expansion() {
        let error = expand("truncated {0", &[Value::Integer(1)]).unwrap_err();
        assert_eq!(error, ExpandError::UnterminatedField(10));
    }

    #[test]
    fn exponential_and_general_notation() {
        let result = expand("{0:e}", &[Value::Double(314.159)]).unwrap();
        assert_eq!(result, "3.141590e+02");

        let result = expand("{0:.2E}", &[Value::Double(0.000314)]).unwrap();
        assert_eq!(result, "3.14E-04");

        let result = expand("{0:g}", &[Value::Double(1000000.0)]).unwrap();
        assert_eq!(result, "1e+06");

        let result = expand("{0}", &[Value::Double(2.5)]).unwrap();
        assert_eq!(result, "2.5");
    }

    #[test]
    fn sign_modes_on_numbers() {
        let result = expand("{0:+} {1:+}", &[Value::Integer(5), Value::Integer(-5)]).unwrap();
        assert_eq!(result, "+5 -5");

        let result = expand("{0: d}", &[Value::Integer(5)]).unwrap();
        assert_eq!(result, " 5");
    }
}
