use kt_ast::{
    AnnotationSpec, ClassName, CodeBlock, FormatArg, MethodSpec, Modifier, PropertySpec, TypeName,
    TypeSpec,
};
use kt_codegen::{CodeGenError, KotlinFile};

fn system() -> ClassName {
    ClassName::new("java.lang", "System")
}

fn time_unit() -> ClassName {
    ClassName::new("java.util.concurrent", "TimeUnit")
}

fn kotlin_long() -> ClassName {
    ClassName::new("kotlin", "Long")
}

fn import_static_type_spec(name: &str) -> TypeSpec {
    let method = MethodSpec::method_builder("minutesToSeconds")
        .add_modifiers([Modifier::Public, Modifier::Static])
        .add_parameter("minutes", kotlin_long())
        .returns(kotlin_long())
        .add_statement("$T.gc()", [system().into()])
        .add_statement(
            "return $1T.SECONDS.convert(minutes, $1T.MINUTES)",
            [time_unit().into()],
        )
        .build();
    TypeSpec::class_builder(name).add_method(method).build()
}

#[test]
fn import_static_readme_example() {
    let hoverboard = ClassName::new("com.mattel", "Hoverboard");
    let named_boards = ClassName::get("com.mattel", &["Hoverboard", "Boards"]);
    let list = ClassName::new("java.util", "List");
    let array_list = ClassName::new("java.util", "ArrayList");
    let collections = ClassName::new("java.util", "Collections");
    let list_of_hoverboards = TypeName::parameterized(list, vec![hoverboard.clone().into()]);

    let beyond = MethodSpec::method_builder("beyond")
        .returns(list_of_hoverboards.clone())
        .add_statement(
            "$T result = new $T<>()",
            [list_of_hoverboards.into(), array_list.into()],
        )
        .add_statement(
            "result.add($T.createNimbus(2000))",
            [hoverboard.clone().into()],
        )
        .add_statement(
            "result.add($T.createNimbus($S))",
            [hoverboard.clone().into(), "2001".into()],
        )
        .add_statement(
            "result.add($T.createNimbus($T.THUNDERBOLT))",
            [hoverboard.clone().into(), named_boards.clone().into()],
        )
        .add_statement("$T.sort(result)", [collections.clone().into()])
        .add_statement(
            "return result.isEmpty() ? $T.emptyList() : result",
            [collections.clone().into()],
        )
        .build();
    let hello = TypeSpec::class_builder("HelloWorld").add_method(beyond).build();
    let example = KotlinFile::builder("com.example.helloworld", hello)
        .add_static_import(hoverboard, "createNimbus")
        .add_static_import(named_boards, "*")
        .add_static_import(collections, "*")
        .build();

    assert_eq!(
        example.to_source().unwrap(),
        "package com.example.helloworld\n\
         \n\
         import static com.mattel.Hoverboard.Boards.*\n\
         import static com.mattel.Hoverboard.createNimbus\n\
         import static java.util.Collections.*\n\
         \n\
         import com.mattel.Hoverboard\n\
         import java.util.ArrayList\n\
         import java.util.List\n\
         \n\
         class HelloWorld {\n\
         \x20 fun beyond(): List<Hoverboard> {\n\
         \x20   List<Hoverboard> result = new ArrayList<>()\n\
         \x20   result.add(createNimbus(2000))\n\
         \x20   result.add(createNimbus(\"2001\"))\n\
         \x20   result.add(createNimbus(THUNDERBOLT))\n\
         \x20   sort(result)\n\
         \x20   return result.isEmpty() ? emptyList() : result\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn import_static_for_crazy_formats_works() {
    let runtime = ClassName::new("java.lang", "Runtime");
    let method = MethodSpec::method_builder("method").build();
    KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("Taco")
            .static_block(
                CodeBlock::builder()
                    .add_statement("$T", [runtime.clone().into()])
                    .add_statement("$T.a()", [runtime.clone().into()])
                    .add_statement("$T.X", [runtime.clone().into()])
                    .add_statement("$T$T", [runtime.clone().into(), runtime.clone().into()])
                    .add_statement("$T.$T", [runtime.clone().into(), runtime.clone().into()])
                    .add_statement("$1T$1T", [runtime.clone().into()])
                    .add_statement("$1T$2L$1T", [runtime.clone().into(), "?".into()])
                    .add_statement("$1T$2L$2S$1T", [runtime.clone().into(), "?".into()])
                    .add_statement(
                        "$1T$2L$2S$1T$3N$1T",
                        [
                            runtime.clone().into(),
                            "?".into(),
                            FormatArg::from(&method),
                        ],
                    )
                    .add_statement("$T$L", [runtime.clone().into(), "?".into()])
                    .add_statement("$T$S", [runtime.clone().into(), "?".into()])
                    .add_statement("$T$N", [runtime.clone().into(), FormatArg::from(&method)])
                    .build(),
            )
            .build(),
    )
    .add_static_import(runtime, "*")
    .build()
    .to_source()
    .unwrap(); // don't look at the generated code...
}

#[test]
fn import_static_mixed() {
    let state = ClassName::get("java.lang", &["Thread", "State"]);
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("Taco")
            .static_block(
                CodeBlock::builder()
                    .add_statement(
                        "assert $1T.valueOf(\"BLOCKED\") == $1T.BLOCKED",
                        [state.clone().into()],
                    )
                    .add_statement("$T.gc()", [system().into()])
                    .add_statement("$1T.out.println($1T.nanoTime())", [system().into()])
                    .build(),
            )
            .add_method(
                MethodSpec::constructor_builder()
                    .add_parameter("states", state.clone())
                    .varargs(true)
                    .build(),
            )
            .build(),
    )
    .add_static_import(state.clone(), "BLOCKED")
    .add_static_import(system(), "*")
    .add_static_import(state, "valueOf")
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import static java.lang.System.*\n\
         import static java.lang.Thread.State.BLOCKED\n\
         import static java.lang.Thread.State.valueOf\n\
         \n\
         import java.lang.Thread\n\
         \n\
         class Taco {\n\
         \x20 static {\n\
         \x20   assert valueOf(\"BLOCKED\") == BLOCKED\n\
         \x20   gc()\n\
         \x20   out.println(nanoTime())\n\
         \x20 }\n\
         \n\
         \x20 constructor(vararg states: Thread.State) {\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn import_static_none() {
    assert_eq!(
        KotlinFile::builder("readme", import_static_type_spec("Util"))
            .build()
            .to_source()
            .unwrap(),
        "package readme\n\
         \n\
         import java.lang.System\n\
         import java.util.concurrent.TimeUnit\n\
         import kotlin.Long\n\
         \n\
         class Util {\n\
         \x20 public static fun minutesToSeconds(minutes: Long): Long {\n\
         \x20   System.gc()\n\
         \x20   return TimeUnit.SECONDS.convert(minutes, TimeUnit.MINUTES)\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn import_static_once() {
    assert_eq!(
        KotlinFile::builder("readme", import_static_type_spec("Util"))
            .add_static_import(time_unit(), "SECONDS")
            .build()
            .to_source()
            .unwrap(),
        "package readme\n\
         \n\
         import static java.util.concurrent.TimeUnit.SECONDS\n\
         \n\
         import java.lang.System\n\
         import java.util.concurrent.TimeUnit\n\
         import kotlin.Long\n\
         \n\
         class Util {\n\
         \x20 public static fun minutesToSeconds(minutes: Long): Long {\n\
         \x20   System.gc()\n\
         \x20   return SECONDS.convert(minutes, TimeUnit.MINUTES)\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn import_static_twice() {
    assert_eq!(
        KotlinFile::builder("readme", import_static_type_spec("Util"))
            .add_static_import(time_unit(), "SECONDS")
            .add_static_import(time_unit(), "MINUTES")
            .build()
            .to_source()
            .unwrap(),
        "package readme\n\
         \n\
         import static java.util.concurrent.TimeUnit.MINUTES\n\
         import static java.util.concurrent.TimeUnit.SECONDS\n\
         \n\
         import java.lang.System\n\
         import kotlin.Long\n\
         \n\
         class Util {\n\
         \x20 public static fun minutesToSeconds(minutes: Long): Long {\n\
         \x20   System.gc()\n\
         \x20   return SECONDS.convert(minutes, MINUTES)\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn import_static_using_wildcards() {
    assert_eq!(
        KotlinFile::builder("readme", import_static_type_spec("Util"))
            .add_static_import(time_unit(), "*")
            .add_static_import(system(), "*")
            .build()
            .to_source()
            .unwrap(),
        "package readme\n\
         \n\
         import static java.lang.System.*\n\
         import static java.util.concurrent.TimeUnit.*\n\
         \n\
         import kotlin.Long\n\
         \n\
         class Util {\n\
         \x20 public static fun minutesToSeconds(minutes: Long): Long {\n\
         \x20   gc()\n\
         \x20   return SECONDS.convert(minutes, MINUTES)\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn no_imports() {
    assert_eq!(
        KotlinFile::builder("com.squareup.tacos", TypeSpec::class_builder("Taco").build())
            .build()
            .to_source()
            .unwrap(),
        "package com.squareup.tacos\n\
         \n\
         class Taco {\n\
         }\n"
    );
}

#[test]
fn single_import() {
    assert_eq!(
        KotlinFile::builder(
            "com.squareup.tacos",
            TypeSpec::class_builder("Taco")
                .add_property(PropertySpec::new(
                    "madeFreshDate",
                    ClassName::new("java.util", "Date"),
                ))
                .build(),
        )
        .build()
        .to_source()
        .unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import java.util.Date\n\
         \n\
         class Taco {\n\
         \x20 madeFreshDate: Date;\n\
         }\n"
    );
}

#[test]
fn conflicting_imports() {
    assert_eq!(
        KotlinFile::builder(
            "com.squareup.tacos",
            TypeSpec::class_builder("Taco")
                .add_property(PropertySpec::new(
                    "madeFreshDate",
                    ClassName::new("java.util", "Date"),
                ))
                .add_property(PropertySpec::new(
                    "madeFreshDatabaseDate",
                    ClassName::new("java.sql", "Date"),
                ))
                .build(),
        )
        .build()
        .to_source()
        .unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import java.util.Date\n\
         \n\
         class Taco {\n\
         \x20 madeFreshDate: Date;\n\
         \n\
         \x20 madeFreshDatabaseDate: java.sql.Date;\n\
         }\n"
    );
}

#[test]
fn skip_java_lang_imports_with_conflicting_class_last() {
    // Whatever is used first wins! In this case the Float in java.lang is
    // silently in scope.
    assert_eq!(
        KotlinFile::builder(
            "com.squareup.tacos",
            TypeSpec::class_builder("Taco")
                .add_property(PropertySpec::new(
                    "litres",
                    ClassName::new("java.lang", "Float"),
                ))
                .add_property(PropertySpec::new(
                    "beverage",
                    ClassName::new("com.squareup.soda", "Float"),
                ))
                .build(),
        )
        .skip_java_lang_imports(true)
        .build()
        .to_source()
        .unwrap(),
        "package com.squareup.tacos\n\
         \n\
         class Taco {\n\
         \x20 litres: Float;\n\
         \n\
         \x20 beverage: com.squareup.soda.Float;\n\
         }\n"
    );
}

#[test]
fn skip_java_lang_imports_with_conflicting_class_first() {
    // Whatever is used first wins! In this case the Float in
    // com.squareup.soda is imported.
    assert_eq!(
        KotlinFile::builder(
            "com.squareup.tacos",
            TypeSpec::class_builder("Taco")
                .add_property(PropertySpec::new(
                    "beverage",
                    ClassName::new("com.squareup.soda", "Float"),
                ))
                .add_property(PropertySpec::new(
                    "litres",
                    ClassName::new("java.lang", "Float"),
                ))
                .build(),
        )
        .skip_java_lang_imports(true)
        .build()
        .to_source()
        .unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import com.squareup.soda.Float\n\
         \n\
         class Taco {\n\
         \x20 beverage: Float;\n\
         \n\
         \x20 litres: java.lang.Float;\n\
         }\n"
    );
}

#[test]
fn conflicting_parent_name() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("A")
            .add_type(
                TypeSpec::class_builder("B")
                    .add_type(TypeSpec::class_builder("Twin").build())
                    .add_type(
                        TypeSpec::class_builder("C")
                            .add_property(PropertySpec::new(
                                "d",
                                ClassName::get("com.squareup.tacos", &["A", "Twin", "D"]),
                            ))
                            .build(),
                    )
                    .build(),
            )
            .add_type(
                TypeSpec::class_builder("Twin")
                    .add_type(TypeSpec::class_builder("D").build())
                    .build(),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         class A {\n\
         \x20 class B {\n\
         \x20   class Twin {\n\
         \x20   }\n\
         \n\
         \x20   class C {\n\
         \x20     d: A.Twin.D;\n\
         \x20   }\n\
         \x20 }\n\
         \n\
         \x20 class Twin {\n\
         \x20   class D {\n\
         \x20   }\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn conflicting_child_name() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("A")
            .add_type(
                TypeSpec::class_builder("B")
                    .add_type(
                        TypeSpec::class_builder("C")
                            .add_property(PropertySpec::new(
                                "d",
                                ClassName::get("com.squareup.tacos", &["A", "Twin", "D"]),
                            ))
                            .add_type(TypeSpec::class_builder("Twin").build())
                            .build(),
                    )
                    .build(),
            )
            .add_type(
                TypeSpec::class_builder("Twin")
                    .add_type(TypeSpec::class_builder("D").build())
                    .build(),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         class A {\n\
         \x20 class B {\n\
         \x20   class C {\n\
         \x20     d: A.Twin.D;\n\
         \n\
         \x20     class Twin {\n\
         \x20     }\n\
         \x20   }\n\
         \x20 }\n\
         \n\
         \x20 class Twin {\n\
         \x20   class D {\n\
         \x20   }\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn conflicting_name_out_of_scope() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("A")
            .add_type(
                TypeSpec::class_builder("B")
                    .add_type(
                        TypeSpec::class_builder("C")
                            .add_property(PropertySpec::new(
                                "d",
                                ClassName::get("com.squareup.tacos", &["A", "Twin", "D"]),
                            ))
                            .add_type(
                                TypeSpec::class_builder("Nested")
                                    .add_type(TypeSpec::class_builder("Twin").build())
                                    .build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .add_type(
                TypeSpec::class_builder("Twin")
                    .add_type(TypeSpec::class_builder("D").build())
                    .build(),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         class A {\n\
         \x20 class B {\n\
         \x20   class C {\n\
         \x20     d: Twin.D;\n\
         \n\
         \x20     class Nested {\n\
         \x20       class Twin {\n\
         \x20       }\n\
         \x20     }\n\
         \x20   }\n\
         \x20 }\n\
         \n\
         \x20 class Twin {\n\
         \x20   class D {\n\
         \x20   }\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn nested_class_and_superclass_share_name() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("Taco")
            .superclass(ClassName::new("com.squareup.wire", "Message"))
            .add_type(
                TypeSpec::class_builder("Builder")
                    .superclass(ClassName::get("com.squareup.wire", &["Message", "Builder"]))
                    .build(),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import com.squareup.wire.Message\n\
         \n\
         class Taco extends Message {\n\
         \x20 class Builder extends Message.Builder {\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn annotation_is_nested_class() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("TestComponent")
            .add_annotation(ClassName::new("dagger", "Component"))
            .add_type(
                TypeSpec::class_builder("Builder")
                    .add_annotation(ClassName::get("dagger", &["Component", "Builder"]))
                    .build(),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import dagger.Component\n\
         \n\
         @Component\n\
         class TestComponent {\n\
         \x20 @Component.Builder\n\
         \x20 class Builder {\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn default_package() {
    let source = KotlinFile::builder(
        "",
        TypeSpec::class_builder("HelloWorld")
            .add_method(
                MethodSpec::method_builder("main")
                    .add_modifiers([Modifier::Public, Modifier::Static])
                    .add_parameter(
                        "args",
                        TypeName::parameterized(
                            ClassName::new("kotlin", "Array"),
                            vec![ClassName::new("java.lang", "String").into()],
                        ),
                    )
                    .add_code("$T.out.println($S);\n", [system().into(), "Hello World!".into()])
                    .build(),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "import java.lang.String\n\
         import java.lang.System\n\
         import kotlin.Array\n\
         \n\
         class HelloWorld {\n\
         \x20 public static fun main(args: Array<String>) {\n\
         \x20   System.out.println(\"Hello World!\");\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn default_package_types_are_not_imported() {
    let source = KotlinFile::builder(
        "hello",
        TypeSpec::class_builder("World")
            .add_superinterface(ClassName::get("", &["Test"]))
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package hello\n\
         \n\
         class World implements Test {\n\
         }\n"
    );
}

#[test]
fn top_of_file_comment() {
    let source = KotlinFile::builder("com.squareup.tacos", TypeSpec::class_builder("Taco").build())
        .add_file_comment("Generated 2015-01-13 by the build. DO NOT EDIT!")
        .build();

    assert_eq!(
        source.to_source().unwrap(),
        "// Generated 2015-01-13 by the build. DO NOT EDIT!\n\
         package com.squareup.tacos\n\
         \n\
         class Taco {\n\
         }\n"
    );
}

#[test]
fn empty_lines_in_top_of_file_comment() {
    let source = KotlinFile::builder("com.squareup.tacos", TypeSpec::class_builder("Taco").build())
        .add_file_comment("\nGENERATED FILE:\n\nDO NOT EDIT!\n")
        .build();

    assert_eq!(
        source.to_source().unwrap(),
        "//\n\
         // GENERATED FILE:\n\
         //\n\
         // DO NOT EDIT!\n\
         //\n\
         package com.squareup.tacos\n\
         \n\
         class Taco {\n\
         }\n"
    );
}

#[test]
fn package_class_conflicts_with_nested_class() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("Taco")
            .add_property(PropertySpec::new(
                "a",
                ClassName::new("com.squareup.tacos", "A"),
            ))
            .add_type(TypeSpec::class_builder("A").build())
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         class Taco {\n\
         \x20 a: com.squareup.tacos.A;\n\
         \n\
         \x20 class A {\n\
         \x20 }\n\
         }\n"
    );
}

#[test]
fn multiple_top_level_types() {
    let source = KotlinFile::builder("com.example", TypeSpec::class_builder("First").build())
        .add_type(
            TypeSpec::class_builder("Second")
                .add_property(PropertySpec::new(
                    "first",
                    ClassName::new("com.example", "First"),
                ))
                .build(),
        )
        .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.example\n\
         \n\
         class First {\n\
         }\n\
         \n\
         class Second {\n\
         \x20 first: First;\n\
         }\n"
    );
}

#[test]
fn interface_with_abstract_method() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::interface_builder("Tasty")
            .add_superinterface(ClassName::new("java.util", "Comparator"))
            .add_method(
                MethodSpec::method_builder("refresh")
                    .add_modifiers([Modifier::Abstract])
                    .build(),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import java.util.Comparator\n\
         \n\
         interface Tasty extends Comparator {\n\
         \x20 abstract fun refresh();\n\
         }\n"
    );
}

#[test]
fn property_modifiers_and_initializer() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("Taco")
            .add_property(
                PropertySpec::builder("count", ClassName::new("kotlin", "Int"))
                    .add_modifiers([Modifier::Private, Modifier::Final])
                    .initializer(CodeBlock::of("$L", ["0".into()]))
                    .build(),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import kotlin.Int\n\
         \n\
         class Taco {\n\
         \x20 private final count: Int = 0;\n\
         }\n"
    );
}

#[test]
fn annotation_with_members() {
    let module = ClassName::new("dagger", "Module");
    let taco_module = ClassName::new("com.squareup.tacos", "TacoModule");
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("Taco")
            .add_annotation(
                AnnotationSpec::get(module)
                    .add_member(CodeBlock::of("includes = $T.class", [taco_module.into()])),
            )
            .build(),
    )
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import dagger.Module\n\
         \n\
         @Module(includes = TacoModule.class)\n\
         class Taco {\n\
         }\n"
    );
}

#[test]
fn invalid_template_surfaces_from_the_build() {
    let taco = TypeSpec::class_builder("Taco")
        .add_method(
            MethodSpec::method_builder("broken")
                .add_statement("$Z", [])
                .build(),
        )
        .build();
    let err = KotlinFile::builder("com.squareup.tacos", taco)
        .build()
        .to_source()
        .unwrap_err();
    assert!(matches!(err, CodeGenError::Format(_)));
}

#[test]
fn repeated_builds_are_byte_identical() {
    let build = || {
        KotlinFile::builder("readme", import_static_type_spec("Util"))
            .add_static_import(time_unit(), "SECONDS")
            .build()
            .to_source()
            .unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn display_matches_to_source() {
    let file = KotlinFile::builder("com.squareup.tacos", TypeSpec::class_builder("Taco").build())
        .build();
    assert_eq!(file.to_string(), file.to_source().unwrap());
}

#[test]
fn custom_indent() {
    let source = KotlinFile::builder(
        "com.squareup.tacos",
        TypeSpec::class_builder("Taco")
            .add_property(PropertySpec::new(
                "madeFreshDate",
                ClassName::new("java.util", "Date"),
            ))
            .build(),
    )
    .indent("    ")
    .build();

    assert_eq!(
        source.to_source().unwrap(),
        "package com.squareup.tacos\n\
         \n\
         import java.util.Date\n\
         \n\
         class Taco {\n\
         \x20   madeFreshDate: Date;\n\
         }\n"
    );
}
