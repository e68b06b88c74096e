/*!
# Introductory Tutorial for Kokoro

Kokoro reads plain English-like statements and writes 6502 assembly.
Give it a source file and an output file and it does the rest.

<pre><code>&nbsp;$ kokoro hello.kok hello.asm
&nbsp;Kokoro Variable Memory Map:
&nbsp;  x                @ $0200 (scalar, 1 byte)
&nbsp;Kokoro compile complete.
</code></pre>

Leave off the output file and the assembly goes to standard output. Use `-`
as the input to read standard input. Stop reading with CTRL-C.

Run `kokoro` with no arguments for an interactive session. Each statement
is compiled as soon as you press ENTER and the assembly is shown right
away. Type CTRL-D to finish and see where your variables ended up.

<pre><code>&nbsp;  Kokoro 0.1.0 (6502)
&nbsp;kokoro> store 5 in x as number
&nbsp;LDA #5
&nbsp;STA $0200
&nbsp;kokoro> if x is equal_to 5 do {
&nbsp;LDA $0200
&nbsp;CMP #5
&nbsp;BNE skip_if_0
&nbsp;   ...> call beep
&nbsp;JSR beep
&nbsp;   ...> }
&nbsp;skip_if_0:
</code></pre>

Each line holds one statement. Keywords may be typed in any case. Blank
lines and lines starting with `#` are ignored.

```text
# Count down from three
store 3 in n as number
bookmark top
store n - 1 in n as number
if n is greater_than 0 do {
    goto top
}
print "Done"
```

A line Kokoro cannot make sense of is not fatal. It shows up in the
assembly as a comment so you can find it.

```text
; Unknown line: jump around
; ERROR: SYNTAX ERROR IN 4 (9..9); EXPECTED IN: store 5 x
```

Only running out of variable memory or failing to read or write a file
stops the compiler.

The `--target` option selects the processor. `6502` is the default and has
no multiply or divide instructions. `mega6502` adds `MUL` and `DIV`.
*/
